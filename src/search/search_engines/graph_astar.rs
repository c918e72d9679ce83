//! A* graph search. Keeps the cheapest known path cost of every state seen
//! so far and drops any path that does not strictly improve on it.
//!
//! Dominated successors are discarded when they are generated and never
//! enter the search tree. A node can still become stale while it waits in the
//! fringe if a cheaper path to its state is found later; such nodes are
//! skipped when popped. Goals are recognised when popped, so with an
//! admissible heuristic the returned path is optimal.

use crate::search::{
    containers::{Fringe, PriorityQueue},
    search_engines::{
        expand_node, start_states, tree_astar::push_children, SearchEngine, SearchStatistics,
    },
    Cost, Heuristic, NodeId, Problem, SearchError, SearchSpace, Solution,
};
use std::collections::HashMap;
use tracing::{debug, info, trace};

#[derive(Debug, Clone, Default)]
pub struct GraphAstar {}

impl GraphAstar {
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

        let mut best_costs: HashMap<P::State, Cost> = HashMap::new();
        let mut open_root_ids = vec![];
        for root_id in root_ids {
            let root = search_space.get_node(root_id);
            if best_costs.contains_key(root.get_state()) {
                statistics.increment_pruned_nodes();
                continue;
            }
            best_costs.insert(root.get_state().clone(), root.get_cost());
            open_root_ids.push(root_id);
        }

        let mut fringe: PriorityQueue<NodeId, P::State> = PriorityQueue::new();
        push_children(&mut fringe, &search_space, open_root_ids, heuristic);
        statistics.register_fringe_size(fringe.len());

        let mut expand_order = 0;
        while let Some(node_id) = fringe.pop() {
            let node = search_space.get_node(node_id);
            if best_costs
                .get(node.get_state())
                .is_some_and(|&best| best < node.get_cost())
            {
                trace!(state = ?node.get_state(), "skipping stale node");
                statistics.increment_pruned_nodes();
                continue;
            }
            if problem.is_goal_state(node.get_state()) {
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
                |state, g_value| match best_costs.get(state) {
                    Some(&best) if best <= g_value => false,
                    _ => {
                        best_costs.insert(state.clone(), g_value);
                        true
                    }
                },
            )?;
            push_children(&mut fringe, &search_space, child_ids, heuristic);
            statistics.register_fringe_size(fringe.len());
        }

        debug!(num_states = best_costs.len(), "fringe exhausted");
        Ok(Solution::unsolved(search_space, false, statistics))
    }
}

impl<P: Problem> SearchEngine<P> for GraphAstar {
    fn run(
        &mut self,
        problem: &P,
        heuristic: Option<&mut dyn Heuristic<P::State>>,
    ) -> Result<Solution<P::State>, SearchError> {
        info!(engine = "graph-astar", problem = problem.name());
        match heuristic {
            Some(heuristic) => self.search(problem, heuristic),
            None => self.search(problem, problem.default_heuristic().as_mut()),
        }
    }
}
