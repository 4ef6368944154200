//! Tree search: every generated node enters the frontier, so a state can be
//! expanded any number of times. On state spaces with cycles this only
//! terminates if a goal is found.

use crate::search::{
    search_engines::{Frontier, QueueStrategy},
    NodeId, SearchNode, SearchSpace,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct TreeSearch;

impl TreeSearch {
    pub fn new() -> Self {
        Self
    }
}

impl<S, A> QueueStrategy<S, A> for TreeSearch {
    fn reset(&mut self) {}

    fn add_to_frontier<F: Frontier<S, A>>(&mut self, node: &SearchNode<S, A>, frontier: &mut F) {
        frontier.push(node);
    }

    fn remove_from_frontier<F: Frontier<S, A>>(
        &mut self,
        _space: &SearchSpace<S, A>,
        frontier: &mut F,
    ) -> Option<NodeId> {
        frontier.pop()
    }

    fn is_frontier_empty<F: Frontier<S, A>>(
        &mut self,
        _space: &SearchSpace<S, A>,
        frontier: &mut F,
    ) -> bool {
        frontier.is_empty()
    }
}
