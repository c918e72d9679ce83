//! A* tree search. States are not deduplicated: a state reachable along
//! several paths is generated (and possibly expanded) once per path.

use crate::search::{
    containers::{Fringe, PriorityQueue},
    search_engines::{expand_node, start_states, SearchEngine, SearchStatistics},
    Heuristic, NodeId, Problem, SearchError, SearchSpace, Solution,
};
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct TreeAstar {}

impl TreeAstar {
    pub fn new() -> Self {
        Self {}
    }

    fn search<P: Problem>(
        &self,
        problem: &P,
        heuristic: &mut dyn Heuristic<P::State>,
    ) -> Result<Solution<P::State>, SearchError> {
        let mut statistics = SearchStatistics::new();
        statistics.increment_iterations();
        let mut search_space = SearchSpace::with_roots(start_states(problem)?);
        statistics.increment_generated_nodes(search_space.len());

        let root_ids = search_space.get_root_ids().to_vec();
        if let Some(&goal_id) = root_ids
            .iter()
            .find(|&&root_id| problem.is_goal_state(search_space.get_state(root_id)))
        {
            info!("start state is a goal state");
            return Ok(Solution::solved(search_space, goal_id, statistics));
        }

        let mut fringe: PriorityQueue<NodeId, P::State> = PriorityQueue::new();
        push_children(&mut fringe, &search_space, root_ids, heuristic);
        statistics.register_fringe_size(fringe.len());

        let mut expand_order = 0;
        while let Some(node_id) = fringe.pop() {
            if problem.is_goal_state(search_space.get_state(node_id)) {
                info!("goal found");
                return Ok(Solution::solved(search_space, node_id, statistics));
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
            push_children(&mut fringe, &search_space, child_ids, heuristic);
            statistics.register_fringe_size(fringe.len());
        }

        debug!("fringe exhausted");
        Ok(Solution::unsolved(search_space, false, statistics))
    }
}

impl<P: Problem> SearchEngine<P> for TreeAstar {
    fn run(
        &mut self,
        problem: &P,
        heuristic: Option<&mut dyn Heuristic<P::State>>,
    ) -> Result<Solution<P::State>, SearchError> {
        info!(engine = "tree-astar", problem = problem.name());
        match heuristic {
            Some(heuristic) => self.search(problem, heuristic),
            None => self.search(problem, problem.default_heuristic().as_mut()),
        }
    }
}

/// Evaluate the given nodes and push them with priority `f = g + h`, ties
/// broken on state.
pub(super) fn push_children<S: Clone + Ord>(
    fringe: &mut PriorityQueue<NodeId, S>,
    search_space: &SearchSpace<S>,
    node_ids: Vec<NodeId>,
    heuristic: &mut dyn Heuristic<S>,
) {
    let states: Vec<S> = node_ids
        .iter()
        .map(|&node_id| search_space.get_state(node_id).clone())
        .collect();
    let h_values = heuristic.evaluate_batch(&states);
    for ((node_id, state), h_value) in node_ids.into_iter().zip(states).zip(h_values) {
        let g_value = search_space.get_node(node_id).get_cost();
        fringe.push(node_id, g_value + h_value, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{search_engines::assert_costs_consistent, SearchStatus};
    use crate::test_utils::*;

    #[test]
    fn two_node_graph_single_expansion() {
        let problem = two_node_graph();
        let solution = TreeAstar::new().run(&problem, None).unwrap();
        assert!(solution.is_solved());
        assert_eq!(solution.cost(), Some(3.0.into()));
        assert_eq!(solution.len(), Some(1));
        assert_eq!(solution.expanded_nodes(), 1);
        assert_eq!(solution.actions()[0].to_string(), "move(B)");
    }

    #[test]
    fn start_goal_needs_no_expansion() {
        let problem = GraphProblem::new(&['A'], &['A'], &[('A', 'B', 1.)]);
        let solution = TreeAstar::new().run(&problem, None).unwrap();
        assert!(solution.is_solved());
        assert_eq!(solution.len(), Some(0));
        assert_eq!(solution.expanded_nodes(), 0);
        assert_eq!(solution.terminal_node().unwrap().get_expand_order(), 0);
        assert_eq!(solution.states(), vec![&'A']);
    }

    #[test]
    fn zero_heuristic_is_uniform_cost() {
        let problem = diamond_graph();
        let solution = TreeAstar::new().run(&problem, None).unwrap();
        assert_eq!(solution.states(), vec![&'S', &'A', &'B', &'G']);
        assert_eq!(solution.cost(), Some(3.0.into()));
        assert_eq!(solution.expansion_sequence(), vec![&'S', &'A', &'B']);
        assert_eq!(solution.expanded_nodes(), 3);
        assert_eq!(solution.generated_nodes(), 7);
        assert_eq!(solution.max_fringe_size(), 4);
        assert_costs_consistent(&problem, solution.search_space());
    }

    #[test]
    fn explicit_heuristic_keeps_optimal_cost() {
        let problem = diamond_graph();
        let mut heuristic = TableHeuristic::diamond_exact();
        let heuristic: &mut dyn Heuristic<char> = &mut heuristic;
        let solution = TreeAstar::new().run(&problem, Some(heuristic)).unwrap();
        assert_eq!(solution.cost(), Some(3.0.into()));
        assert_eq!(solution.expansion_sequence(), vec![&'S', &'A', &'B']);
    }

    #[test]
    fn unreachable_goal_exhausts_fringe() {
        let problem = dead_end_graph();
        let solution = TreeAstar::new().run(&problem, None).unwrap();
        assert_eq!(solution.status(), SearchStatus::Exhausted);
        assert!(!solution.is_cutoff());
        assert_eq!(solution.expanded_nodes(), 3);
        assert!(solution.path().is_empty());
    }

    #[test]
    fn repeated_runs_are_identical() {
        let problem = diamond_graph();
        let first = TreeAstar::new().run(&problem, None).unwrap();
        let second = TreeAstar::new().run(&problem, None).unwrap();
        assert_eq!(first.actions(), second.actions());
        assert_eq!(first.expansion_sequence(), second.expansion_sequence());
        assert_eq!(first.max_fringe_size(), second.max_fringe_size());
    }
}
