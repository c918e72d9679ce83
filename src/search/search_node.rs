use crate::search::Action;
use ordered_float::OrderedFloat;

/// Path cost, i.e. the sum of the transition costs from a root.
pub type Cost = OrderedFloat<f64>;

/// Index of a node in its [`crate::search::SearchSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(id: usize) -> Self {
        Self(id)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

/// A [`SearchNode`] is a node in the search tree. It stores the state it
/// wraps together with how the search got there: the generating parent and
/// action, the path cost and depth. Parents and children are referred to by
/// [`NodeId`], the nodes themselves are owned by the search space.
#[derive(Debug, Clone)]
pub struct SearchNode<S> {
    node_id: NodeId,
    state: S,
    /// Action that led to this node, `None` for roots
    action: Option<Action>,
    /// Cost of the path from the root to this node
    cost: Cost,
    parent_id: Option<NodeId>,
    /// Number of edges from the root
    depth: usize,
    /// Position of the node in the expansion sequence of the search, starting
    /// at 1. Zero if the node was never expanded.
    expand_order: usize,
    /// Children generated when this node was expanded, in the order they
    /// were handed to the fringe.
    successors: Vec<NodeId>,
}

impl<S> SearchNode<S> {
    /// Create a node without parent. This should only be used for the roots
    /// of the search tree, for other nodes see [`SearchNode::new_with_parent`].
    pub fn new_without_parent(node_id: NodeId, state: S) -> Self {
        Self {
            node_id,
            state,
            action: None,
            cost: OrderedFloat(0.),
            parent_id: None,
            depth: 0,
            expand_order: 0,
            successors: vec![],
        }
    }

    pub fn new_with_parent(
        node_id: NodeId,
        state: S,
        parent: &SearchNode<S>,
        action: Action,
        action_cost: Cost,
    ) -> Self {
        Self {
            node_id,
            state,
            action: Some(action),
            cost: parent.cost + action_cost,
            parent_id: Some(parent.node_id),
            depth: parent.depth + 1,
            expand_order: 0,
            successors: vec![],
        }
    }

    pub(crate) fn mark_expanded(&mut self, expand_order: usize) {
        debug_assert_eq!(self.expand_order, 0, "Node must not be expanded twice");
        self.expand_order = expand_order;
    }

    pub(crate) fn add_successor(&mut self, child_id: NodeId) {
        self.successors.push(child_id);
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_state(&self) -> &S {
        &self.state
    }

    pub fn get_action(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    pub fn get_cost(&self) -> Cost {
        self.cost
    }

    pub fn get_parent_id(&self) -> Option<NodeId> {
        self.parent_id
    }

    pub fn get_depth(&self) -> usize {
        self.depth
    }

    pub fn get_expand_order(&self) -> usize {
        self.expand_order
    }

    pub fn is_expanded(&self) -> bool {
        self.expand_order > 0
    }

    pub fn get_successors(&self) -> &[NodeId] {
        &self.successors
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
