use crate::search::{Action, Cost, NodeId, SearchNode};
use segvec::{Linear, SegVec};
use std::fmt;

/// A [`SearchSpace`] owns every node generated during a search run. Nodes
/// are appended and never removed, so the whole explored tree is available
/// once the search has finished.
pub struct SearchSpace<S> {
    root_ids: Vec<NodeId>,
    nodes: SegVec<SearchNode<S>, Linear>,
}

impl<S> SearchSpace<S> {
    pub fn new() -> Self {
        Self {
            root_ids: vec![],
            nodes: SegVec::new(),
        }
    }

    /// Create a search space with one root per start state, in order.
    pub fn with_roots(start_states: Vec<S>) -> Self {
        let mut search_space = Self::new();
        for state in start_states {
            search_space.insert_root(state);
        }
        search_space
    }

    pub fn insert_root(&mut self, state: S) -> NodeId {
        let node_id = NodeId::new(self.nodes.len());
        self.nodes.push(SearchNode::new_without_parent(node_id, state));
        self.root_ids.push(node_id);
        node_id
    }

    /// Create a child of `parent_id` and record it as one of the parent's
    /// successors.
    pub fn insert_child(
        &mut self,
        parent_id: NodeId,
        state: S,
        action: Action,
        action_cost: Cost,
    ) -> NodeId {
        let node_id = NodeId::new(self.nodes.len());
        let child = SearchNode::new_with_parent(
            node_id,
            state,
            self.get_node(parent_id),
            action,
            action_cost,
        );
        self.nodes.push(child);
        self.get_node_mut(parent_id).add_successor(node_id);
        node_id
    }

    /// Walk the parent links from `node_id` back to its root. The returned
    /// ids start at the root.
    pub fn extract_path(&self, node_id: NodeId) -> Vec<NodeId> {
        let mut path = vec![node_id];
        let mut current_node = self.get_node(node_id);
        while let Some(parent_id) = current_node.get_parent_id() {
            path.push(parent_id);
            current_node = self.get_node(parent_id);
        }
        path.reverse();
        path
    }

    #[inline(always)]
    pub fn get_root_ids(&self) -> &[NodeId] {
        &self.root_ids
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<S> {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode<S> {
        self.nodes.get_mut(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &S {
        self.get_node(node_id).get_state()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchNode<S>> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }
}

impl<S> fmt::Debug for SearchSpace<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchSpace")
            .field("root_ids", &self.root_ids)
            .field("num_nodes", &self.nodes.len())
            .finish()
    }
}

impl<S> Default for SearchSpace<S> {
    fn default() -> Self {
        Self::new()
    }
}
