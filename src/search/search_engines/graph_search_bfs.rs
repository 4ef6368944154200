//! Graph search for breadth-first orderings. On top of the explored set it
//! remembers which states currently sit in the frontier and never inserts a
//! second node for them, which saves memory on FIFO frontiers.
//!
//! Do not combine with a priority frontier: a cheaper node for a state that is
//! already waiting in the frontier would be dropped.

use crate::search::{
    search_engines::{Frontier, QueueStrategy},
    NodeId, SearchNode, SearchSpace,
};
use std::collections::HashSet;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct GraphSearchBfs<S> {
    explored: HashSet<S>,
    frontier_states: HashSet<S>,
}

impl<S> Default for GraphSearchBfs<S> {
    fn default() -> Self {
        Self {
            explored: HashSet::new(),
            frontier_states: HashSet::new(),
        }
    }
}

impl<S: Eq + Hash> GraphSearchBfs<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_explored(&self, state: &S) -> bool {
        self.explored.contains(state)
    }

    pub fn is_in_frontier(&self, state: &S) -> bool {
        self.frontier_states.contains(state)
    }
}

impl<S, A> QueueStrategy<S, A> for GraphSearchBfs<S>
where
    S: Clone + Eq + Hash,
{
    fn reset(&mut self) {
        self.explored.clear();
        self.frontier_states.clear();
    }

    fn add_to_frontier<F: Frontier<S, A>>(&mut self, node: &SearchNode<S, A>, frontier: &mut F) {
        let state = node.get_state();
        if !self.explored.contains(state) && !self.frontier_states.contains(state) {
            frontier.push(node);
            self.frontier_states.insert(state.clone());
        }
    }

    fn remove_from_frontier<F: Frontier<S, A>>(
        &mut self,
        space: &SearchSpace<S, A>,
        frontier: &mut F,
    ) -> Option<NodeId> {
        let node_id = frontier.pop()?;
        let state = space.get_state(node_id);
        self.frontier_states.remove(state);
        self.explored.insert(state.clone());
        Some(node_id)
    }

    fn is_frontier_empty<F: Frontier<S, A>>(
        &mut self,
        _space: &SearchSpace<S, A>,
        frontier: &mut F,
    ) -> bool {
        frontier.is_empty()
    }
}
