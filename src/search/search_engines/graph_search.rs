//! Graph search: a state is expanded at most once. Nodes whose state has
//! already been expanded are not added to the frontier, but several
//! unexpanded nodes with the same state may wait in the frontier at the same
//! time. Stale copies are discarded lazily when they reach the head of the
//! frontier, which keeps this strategy correct for any frontier ordering.

use crate::search::{
    search_engines::{Frontier, QueueStrategy},
    NodeId, SearchNode, SearchSpace,
};
use std::collections::HashSet;
use std::hash::Hash;
use tracing::trace;

#[derive(Debug, Clone)]
pub struct GraphSearch<S> {
    explored: HashSet<S>,
}

impl<S> Default for GraphSearch<S> {
    fn default() -> Self {
        Self {
            explored: HashSet::new(),
        }
    }
}

impl<S: Eq + Hash> GraphSearch<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_explored(&self, state: &S) -> bool {
        self.explored.contains(state)
    }

    pub fn num_explored(&self) -> usize {
        self.explored.len()
    }
}

impl<S, A> QueueStrategy<S, A> for GraphSearch<S>
where
    S: Clone + Eq + Hash,
{
    fn reset(&mut self) {
        self.explored.clear();
    }

    fn add_to_frontier<F: Frontier<S, A>>(&mut self, node: &SearchNode<S, A>, frontier: &mut F) {
        if !self.explored.contains(node.get_state()) {
            frontier.push(node);
        }
    }

    fn remove_from_frontier<F: Frontier<S, A>>(
        &mut self,
        space: &SearchSpace<S, A>,
        frontier: &mut F,
    ) -> Option<NodeId> {
        let node_id = frontier.pop()?;
        self.explored.insert(space.get_state(node_id).clone());
        Some(node_id)
    }

    fn is_frontier_empty<F: Frontier<S, A>>(
        &mut self,
        space: &SearchSpace<S, A>,
        frontier: &mut F,
    ) -> bool {
        while let Some(node_id) = frontier.peek() {
            if !self.explored.contains(space.get_state(node_id)) {
                break;
            }
            trace!(node_id = node_id.id(), "discarding explored node");
            frontier.pop();
        }
        frontier.is_empty()
    }
}
