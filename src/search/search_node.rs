use ordered_float::OrderedFloat;

/// Cumulative cost of the path from the root to a node.
pub type PathCost = OrderedFloat<f64>;

/// Index of a node inside a [`crate::search::SearchSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn id(&self) -> usize {
        self.0
    }
}

/// Parent id of root nodes.
pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// A [`SearchNode`] is an element of the search tree: a state together with
/// how it was reached. Nodes are never modified once created; the parent is
/// referred to by id so that many nodes can share the same ancestors.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    /// Position of this node in its search space
    node_id: NodeId,
    state: S,
    /// Parent node, [`NO_NODE`] for the root
    parent_id: NodeId,
    /// Action that led from the parent to this node, `None` for the root
    action: Option<A>,
    /// Sum of the step costs from the root to this node
    path_cost: PathCost,
    /// Number of actions from the root to this node
    depth: usize,
}

impl<S, A> SearchNode<S, A> {
    /// Create a new search node with no parent. This should only be used for
    /// the root node of the search tree. For non-root nodes see
    /// [`SearchNode::new_with_parent`].
    pub(crate) fn new_without_parent(node_id: NodeId, state: S) -> Self {
        Self {
            node_id,
            state,
            parent_id: NO_NODE,
            action: None,
            path_cost: OrderedFloat(0.),
            depth: 0,
        }
    }

    /// Create a node reached from `parent` via `action`. The path cost is
    /// the parent's path cost plus `step_cost`.
    pub(crate) fn new_with_parent(
        node_id: NodeId,
        state: S,
        parent: &SearchNode<S, A>,
        action: A,
        step_cost: f64,
    ) -> Self {
        Self {
            node_id,
            state,
            parent_id: parent.node_id,
            action: Some(action),
            path_cost: parent.path_cost + step_cost,
            depth: parent.depth + 1,
        }
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_state(&self) -> &S {
        &self.state
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    pub fn get_action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    pub fn get_path_cost(&self) -> PathCost {
        self.path_cost
    }

    pub fn get_depth(&self) -> usize {
        self.depth
    }

    pub fn is_root(&self) -> bool {
        self.parent_id == NO_NODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_has_no_parent_and_zero_cost() {
        let root: SearchNode<char, &str> = SearchNode::new_without_parent(NodeId::new(0), 'A');
        assert!(root.is_root());
        assert_eq!(root.get_parent_id(), NO_NODE);
        assert_eq!(root.get_action(), None);
        assert_eq!(root.get_path_cost(), OrderedFloat(0.));
        assert_eq!(root.get_depth(), 0);
    }

    #[test]
    fn child_accumulates_path_cost() {
        let root = SearchNode::new_without_parent(NodeId::new(0), 'A');
        let child = SearchNode::new_with_parent(NodeId::new(1), 'B', &root, "A->B", 2.5);
        let grandchild = SearchNode::new_with_parent(NodeId::new(2), 'C', &child, "B->C", 1.);

        assert!(!child.is_root());
        assert_eq!(child.get_parent_id(), root.get_node_id());
        assert_eq!(child.get_action(), Some(&"A->B"));
        assert_eq!(child.get_path_cost(), OrderedFloat(2.5));
        assert_eq!(grandchild.get_path_cost(), OrderedFloat(3.5));
        assert_eq!(grandchild.get_depth(), 2);
    }
}
