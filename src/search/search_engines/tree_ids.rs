//! Iterative deepening depth-first tree search. Runs a depth limited search
//! for the limits `0, 1, ..., max_depth`, restarting from fresh roots each
//! time, until a goal is found or an iteration finishes without hitting the
//! limit. The returned path is a shallowest one found, not necessarily the
//! cheapest.

use crate::search::{
    containers::{Fringe, Stack},
    search_engines::{expand_node, start_states, SearchEngine, SearchStatistics},
    Heuristic, Problem, SearchError, SearchSpace, Solution,
};
use tracing::{debug, info};

pub const DEFAULT_MAX_DEPTH: usize = 50;

#[derive(Debug, Clone)]
pub struct TreeIds {
    max_depth: usize,
}

impl TreeIds {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    fn search<P: Problem>(&self, problem: &P) -> Result<Solution<P::State>, SearchError> {
        let mut statistics = SearchStatistics::new();
        let start_states = start_states(problem)?;
        let mut search_space = SearchSpace::new();
        let mut expand_order = 0;

        for depth_limit in 0..=self.max_depth {
            statistics.increment_iterations();
            search_space = SearchSpace::with_roots(start_states.clone());
            statistics.increment_generated_nodes(search_space.len());

            let mut fringe = Stack::new();
            for &root_id in search_space.get_root_ids() {
                fringe.push(root_id);
            }
            statistics.register_fringe_size(fringe.len());

            let mut cutoff = false;
            while let Some(node_id) = fringe.pop() {
                let node = search_space.get_node(node_id);
                if problem.is_goal_state(node.get_state()) {
                    info!(depth_limit, "goal found");
                    return Ok(Solution::solved(search_space, node_id, statistics));
                }
                if node.get_depth() >= depth_limit {
                    cutoff = true;
                    continue;
                }

                expand_order += 1;
                let child_ids = expand_node(
                    problem,
                    &mut search_space,
                    node_id,
                    expand_order,
                    &mut statistics,
                    |_, _| true,
                )?;
                for child_id in child_ids {
                    fringe.push(child_id);
                }
                statistics.register_fringe_size(fringe.len());
            }

            debug!(depth_limit, cutoff, "iteration finished");
            if !cutoff {
                // Nothing was cut off, so deeper limits cannot reach more states.
                return Ok(Solution::unsolved(search_space, false, statistics));
            }
        }

        info!(max_depth = self.max_depth, "depth limit reached");
        Ok(Solution::unsolved(search_space, true, statistics))
    }
}

impl Default for TreeIds {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl<P: Problem> SearchEngine<P> for TreeIds {
    /// Depth-first search ignores the heuristic.
    fn run(
        &mut self,
        problem: &P,
        _heuristic: Option<&mut dyn Heuristic<P::State>>,
    ) -> Result<Solution<P::State>, SearchError> {
        info!(
            engine = "tree-ids",
            problem = problem.name(),
            max_depth = self.max_depth
        );
        self.search(problem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{search_engines::assert_costs_consistent, SearchStatus};
    use crate::test_utils::*;

    #[test]
    fn depth_zero_is_cut_off() {
        let problem = two_node_graph();
        let solution = TreeIds::new(0).run(&problem, None).unwrap();
        assert_eq!(solution.status(), SearchStatus::Cutoff);
        assert!(solution.is_cutoff());
        assert!(!solution.is_solved());
        assert_eq!(solution.iterations(), 1);
    }

    #[test]
    fn depth_one_reaches_goal() {
        let problem = two_node_graph();
        let solution = TreeIds::new(1).run(&problem, None).unwrap();
        assert!(solution.is_solved());
        assert_eq!(solution.len(), Some(1));
        assert_eq!(solution.iterations(), 2);
    }

    #[test]
    fn start_goal_needs_no_expansion() {
        let problem = GraphProblem::new(&['A'], &['A'], &[('A', 'B', 1.)]);
        let solution = TreeIds::new(0).run(&problem, None).unwrap();
        assert!(solution.is_solved());
        assert_eq!(solution.len(), Some(0));
        assert_eq!(solution.expanded_nodes(), 0);
    }

    #[test]
    fn finds_shallowest_goal() {
        let problem = diamond_graph();
        let solution = TreeIds::default().run(&problem, None).unwrap();
        // One iteration per limit 0, 1 and 2
        assert_eq!(solution.iterations(), 3);
        assert_eq!(solution.len(), Some(2));
        assert_eq!(solution.states(), vec![&'S', &'B', &'G']);
        assert_eq!(solution.cost(), Some(5.0.into()));
        assert_eq!(solution.expanded_nodes(), 3);
        assert_eq!(solution.expansion_sequence(), vec![&'S', &'B']);
        assert_costs_consistent(&problem, solution.search_space());
    }

    #[test]
    fn exhausts_finite_space() {
        let problem = dead_end_graph();
        let solution = TreeIds::new(10).run(&problem, None).unwrap();
        assert_eq!(solution.status(), SearchStatus::Exhausted);
        assert_eq!(solution.iterations(), 3);
    }

    #[test]
    fn cycle_is_cut_off_at_max_depth() {
        let problem = cyclic_graph();
        let solution = TreeIds::new(4).run(&problem, None).unwrap();
        assert_eq!(solution.status(), SearchStatus::Cutoff);
        assert_eq!(solution.iterations(), 5);
        assert_eq!(solution.search_space().len(), 5);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let problem = diamond_graph();
        let first = TreeIds::default().run(&problem, None).unwrap();
        let second = TreeIds::default().run(&problem, None).unwrap();
        assert_eq!(first.actions(), second.actions());
        assert_eq!(first.expansion_sequence(), second.expansion_sequence());
        assert_eq!(first.max_fringe_size(), second.max_fringe_size());
    }
}
