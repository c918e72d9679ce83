//! The outcome of a search run. A [`Solution`] keeps the whole search tree
//! the run built, so besides the path to the goal it can report how the
//! search got there.

use crate::search::{Action, Cost, NodeId, SearchNode, SearchSpace, SearchStatistics};
use serde::Serialize;
use std::fmt::Debug;
use strum_macros::EnumIs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIs, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStatus {
    /// A goal state was reached
    Solved,
    /// The reachable space was searched without finding a goal
    Exhausted,
    /// The depth limit was reached before the space could be exhausted
    Cutoff,
}

/// One step of a solution path: a state together with the action that
/// produced it (none for the root) and the path cost so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep<'a, S> {
    pub state: &'a S,
    pub action: Option<&'a Action>,
    pub cost: Cost,
}

#[derive(Debug)]
pub struct Solution<S> {
    search_space: SearchSpace<S>,
    terminal_id: Option<NodeId>,
    cutoff: bool,
    statistics: SearchStatistics,
}

impl<S> Solution<S> {
    pub(crate) fn solved(
        search_space: SearchSpace<S>,
        terminal_id: NodeId,
        statistics: SearchStatistics,
    ) -> Self {
        Self::new(search_space, Some(terminal_id), false, statistics)
    }

    pub(crate) fn unsolved(
        search_space: SearchSpace<S>,
        cutoff: bool,
        statistics: SearchStatistics,
    ) -> Self {
        Self::new(search_space, None, cutoff, statistics)
    }

    fn new(
        search_space: SearchSpace<S>,
        terminal_id: Option<NodeId>,
        cutoff: bool,
        mut statistics: SearchStatistics,
    ) -> Self {
        statistics.finalise_search();
        Self {
            search_space,
            terminal_id,
            cutoff,
            statistics,
        }
    }

    pub fn status(&self) -> SearchStatus {
        match (self.terminal_id, self.cutoff) {
            (Some(_), _) => SearchStatus::Solved,
            (None, true) => SearchStatus::Cutoff,
            (None, false) => SearchStatus::Exhausted,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.terminal_id.is_some()
    }

    /// Whether a depth limit truncated the search.
    pub fn is_cutoff(&self) -> bool {
        self.cutoff
    }

    pub fn terminal_node(&self) -> Option<&SearchNode<S>> {
        self.terminal_id
            .map(|node_id| self.search_space.get_node(node_id))
    }

    pub fn roots(&self) -> impl Iterator<Item = &SearchNode<S>> {
        self.search_space
            .get_root_ids()
            .iter()
            .map(|&node_id| self.search_space.get_node(node_id))
    }

    /// The path from a root to the goal, root first. Empty if no goal was
    /// found.
    pub fn path(&self) -> Vec<PathStep<'_, S>> {
        let Some(terminal_id) = self.terminal_id else {
            return vec![];
        };
        self.search_space
            .extract_path(terminal_id)
            .into_iter()
            .map(|node_id| {
                let node = self.search_space.get_node(node_id);
                PathStep {
                    state: node.get_state(),
                    action: node.get_action(),
                    cost: node.get_cost(),
                }
            })
            .collect()
    }

    pub fn actions(&self) -> Vec<&Action> {
        self.path().into_iter().filter_map(|step| step.action).collect()
    }

    pub fn states(&self) -> Vec<&S> {
        self.path().into_iter().map(|step| step.state).collect()
    }

    pub fn cost(&self) -> Option<Cost> {
        self.terminal_node().map(|node| node.get_cost())
    }

    /// Number of actions on the path.
    pub fn len(&self) -> Option<usize> {
        self.terminal_node().map(|node| node.get_depth())
    }

    /// The expanded states of the final search tree, in expansion order.
    pub fn expansion_sequence(&self) -> Vec<&S> {
        let mut expanded: Vec<&SearchNode<S>> = self
            .search_space
            .iter()
            .filter(|node| node.is_expanded())
            .collect();
        expanded.sort_by_key(|node| node.get_expand_order());
        expanded.into_iter().map(|node| node.get_state()).collect()
    }

    pub fn expanded_nodes(&self) -> usize {
        self.statistics.expanded_nodes()
    }

    pub fn generated_nodes(&self) -> usize {
        self.statistics.generated_nodes()
    }

    pub fn pruned_nodes(&self) -> usize {
        self.statistics.pruned_nodes()
    }

    pub fn max_fringe_size(&self) -> usize {
        self.statistics.max_fringe_size()
    }

    pub fn iterations(&self) -> usize {
        self.statistics.iterations()
    }

    pub fn search_space(&self) -> &SearchSpace<S> {
        &self.search_space
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    pub fn report(&self) -> SolutionReport {
        SolutionReport {
            status: self.status(),
            cost: self.cost().map(|cost| cost.into_inner()),
            length: self.len(),
            plan: self
                .actions()
                .into_iter()
                .map(|action| action.to_string())
                .collect(),
            expanded_nodes: self.expanded_nodes(),
            generated_nodes: self.generated_nodes(),
            pruned_nodes: self.pruned_nodes(),
            max_fringe_size: self.max_fringe_size(),
            iterations: self.iterations(),
            search_duration: self
                .statistics
                .search_duration()
                .map(|duration| duration.as_secs_f64()),
        }
    }
}

impl<S: Debug> Solution<S> {
    /// Human readable rendering of the path, one step per line.
    pub fn path_to_string(&self) -> String {
        self.path()
            .iter()
            .map(|step| match step.action {
                Some(action) => format!("{} -> {:?} [g={}]", action, step.state, step.cost),
                None => format!("start {:?}", step.state),
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

/// Diagnostics of a finished run, for consumers such as log or chart
/// generators.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SolutionReport {
    pub status: SearchStatus,
    pub cost: Option<f64>,
    pub length: Option<usize>,
    pub plan: Vec<String>,
    pub expanded_nodes: usize,
    pub generated_nodes: usize,
    pub pruned_nodes: usize,
    pub max_fringe_size: usize,
    pub iterations: usize,
    pub search_duration: Option<f64>,
}

impl SolutionReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
