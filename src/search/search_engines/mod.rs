mod graph_astar;
mod search_engine;
mod search_statistics;
mod tree_astar;
mod tree_ids;

pub use graph_astar::GraphAstar;
pub use search_engine::{SearchEngine, SearchEngineName};
pub use search_statistics::SearchStatistics;
pub use tree_astar::TreeAstar;
pub use tree_ids::{TreeIds, DEFAULT_MAX_DEPTH};

use crate::search::{Cost, NodeId, Problem, SearchError, SearchSpace, Successor};
use tracing::trace;

/// The start states of `problem`, which must not be empty.
fn start_states<P: Problem>(problem: &P) -> Result<Vec<P::State>, SearchError> {
    let start_states = problem.get_start_states();
    if start_states.is_empty() {
        return Err(SearchError::EmptyStartStates {
            problem: problem.name().to_string(),
        });
    }
    Ok(start_states)
}

/// The successors of `state`, ordered by resulting state. The sort is
/// stable, so successors reaching the same state keep the order the problem
/// generated them in.
fn sorted_successors<P: Problem>(
    problem: &P,
    state: &P::State,
) -> Result<Vec<Successor<P::State>>, SearchError> {
    let mut successors = problem.get_successors(state)?;
    successors.sort_by(|a, b| a.state.cmp(&b.state));
    Ok(successors)
}

/// Expand the node `node_id`: mark it with `expand_order`, generate its
/// successors in state order and attach those accepted by `keep` as
/// children. `keep` receives the successor state and its path cost. Returns
/// the ids of the new children, in order.
fn expand_node<P, F>(
    problem: &P,
    search_space: &mut SearchSpace<P::State>,
    node_id: NodeId,
    expand_order: usize,
    statistics: &mut SearchStatistics,
    mut keep: F,
) -> Result<Vec<NodeId>, SearchError>
where
    P: Problem,
    F: FnMut(&P::State, Cost) -> bool,
{
    let node = search_space.get_node_mut(node_id);
    node.mark_expanded(expand_order);
    let state = node.get_state().clone();
    let g_value = node.get_cost();
    statistics.increment_expanded_nodes();
    trace!(expand_order, depth = node.get_depth(), g = g_value.into_inner(), state = ?state);

    let mut child_ids = vec![];
    for successor in sorted_successors(problem, &state)? {
        if !keep(&successor.state, g_value + successor.cost) {
            statistics.increment_pruned_nodes();
            continue;
        }
        child_ids.push(search_space.insert_child(
            node_id,
            successor.state,
            successor.action,
            successor.cost,
        ));
    }
    statistics.increment_generated_nodes(child_ids.len());
    Ok(child_ids)
}

/// Every node must hold `cost == parent.cost + action_cost`, where the
/// action cost is the one `problem` offers for the node's action from the
/// parent state. This is what the engines rely on when comparing path costs.
#[cfg(test)]
fn assert_costs_consistent<P: Problem>(problem: &P, search_space: &SearchSpace<P::State>) {
    for node in search_space.iter() {
        match node.get_parent_id() {
            None => {
                assert_eq!(node.get_cost().into_inner(), 0.);
                assert_eq!(node.get_depth(), 0);
            }
            Some(parent_id) => {
                let parent = search_space.get_node(parent_id);
                let action = node.get_action().expect("child nodes have an action");
                let successor = problem
                    .get_successors(parent.get_state())
                    .unwrap()
                    .into_iter()
                    .find(|s| &s.action == action && &s.state == node.get_state())
                    .expect("child must be a successor of its parent");
                assert_eq!(node.get_cost(), parent.get_cost() + successor.cost);
                assert_eq!(node.get_depth(), parent.get_depth() + 1);
                assert!(parent.get_successors().contains(&node.get_node_id()));
            }
        }
    }
}
