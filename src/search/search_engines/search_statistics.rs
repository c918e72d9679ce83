use std::time::{Duration, Instant};
use tracing::info;

#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: usize,
    /// Number of nodes generated, roots included
    generated_nodes: usize,
    /// Number of successors discarded because a path at least as cheap to
    /// the same state was known
    pruned_nodes: usize,
    /// Largest number of nodes held by the fringe at any point
    max_fringe_size: usize,
    /// Number of depth limits tried, one for engines without depth limits
    iterations: usize,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the search finished
    search_duration: Option<Duration>,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            pruned_nodes: 0,
            max_fringe_size: 0,
            iterations: 0,
            search_start_time: Instant::now(),
            search_duration: None,
            last_log_time: Instant::now(),
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes;
        self.log_if_needed();
    }

    pub fn increment_pruned_nodes(&mut self) {
        self.pruned_nodes += 1;
    }

    pub fn increment_iterations(&mut self) {
        self.iterations += 1;
    }

    pub fn register_fringe_size(&mut self, fringe_size: usize) {
        self.max_fringe_size = self.max_fringe_size.max(fringe_size);
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn pruned_nodes(&self) -> usize {
        self.pruned_nodes
    }

    pub fn max_fringe_size(&self) -> usize {
        self.max_fringe_size
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Wall time of the search, `None` while it is still running.
    pub fn search_duration(&self) -> Option<Duration> {
        self.search_duration
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.log();
        }
    }

    pub fn log(&mut self) {
        self.last_log_time = Instant::now();
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            pruned_nodes = self.pruned_nodes,
            max_fringe_size = self.max_fringe_size,
            iterations = self.iterations
        );
    }

    pub fn finalise_search(&mut self) {
        info!("finalising search");
        self.log();
        let search_duration = self.search_start_time.elapsed();
        self.search_duration = Some(search_duration);
        info!(search_duration = search_duration.as_secs_f64());
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
