use crate::search::{NodeId, SearchNode, NO_NODE};
use segvec::{Linear, SegVec};

/// A [`SearchSpace`] owns every node generated during one search invocation.
/// Nodes are only ever appended, so a [`NodeId`] stays valid until the space
/// is dropped, which happens when the search returns.
///
/// Unlike a closed list, the same state may appear in several nodes; duplicate
/// handling is left to the frontier strategies.
#[derive(Debug)]
pub struct SearchSpace<S, A> {
    nodes: SegVec<SearchNode<S, A>, Linear>,
}

impl<S, A> Default for SearchSpace<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> SearchSpace<S, A> {
    pub fn new() -> Self {
        Self {
            nodes: SegVec::new(),
        }
    }

    pub fn insert_root(&mut self, state: S) -> NodeId {
        let node_id = NodeId::new(self.nodes.len());
        self.nodes.push(SearchNode::new_without_parent(node_id, state));
        node_id
    }

    pub fn insert_child(
        &mut self,
        state: S,
        parent_id: NodeId,
        action: A,
        step_cost: f64,
    ) -> NodeId {
        let node_id = NodeId::new(self.nodes.len());
        let node = SearchNode::new_with_parent(
            node_id,
            state,
            self.get_node(parent_id),
            action,
            step_cost,
        );
        self.nodes.push(node);
        node_id
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<S, A> {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &S {
        self.get_node(node_id).get_state()
    }

    /// Ids of the nodes from the root down to (and including) `node_id`.
    pub fn path_from_root(&self, node_id: NodeId) -> Vec<NodeId> {
        let mut path = vec![node_id];
        let mut current_node = self.get_node(node_id);
        while NO_NODE != current_node.get_parent_id() {
            path.push(current_node.get_parent_id());
            current_node = self.get_node(current_node.get_parent_id());
        }
        path.reverse();
        path
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn nodes_are_addressed_by_insertion_order() {
        let mut space: SearchSpace<char, &str> = SearchSpace::new();
        let a = space.insert_root('A');
        let b = space.insert_child('B', a, "A->B", 1.);
        let c = space.insert_child('C', b, "B->C", 4.);

        assert_eq!(space.len(), 3);
        assert_eq!(a.id(), 0);
        assert_eq!(c.id(), 2);
        assert_eq!(*space.get_state(b), 'B');
        assert_eq!(space.get_node(c).get_path_cost(), OrderedFloat(5.));
    }

    #[test]
    fn path_from_root_walks_parents() {
        let mut space: SearchSpace<char, &str> = SearchSpace::new();
        let a = space.insert_root('A');
        let b = space.insert_child('B', a, "A->B", 1.);
        let _sibling = space.insert_child('D', a, "A->D", 1.);
        let c = space.insert_child('C', b, "B->C", 1.);

        assert_eq!(space.path_from_root(c), vec![a, b, c]);
        assert_eq!(space.path_from_root(a), vec![a]);
    }
}
