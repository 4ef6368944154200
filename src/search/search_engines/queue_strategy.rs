use crate::search::{search_engines::Frontier, NodeId, SearchNode, SearchSpace};

/// The three frontier primitives of [`crate::search::search_engines::QueueSearch`].
/// Implementations differ only in how they deal with repeated states.
pub trait QueueStrategy<S, A> {
    /// Forget everything remembered from a previous search.
    fn reset(&mut self);

    /// Offer a freshly generated node to the frontier. The strategy may refuse
    /// to insert it.
    fn add_to_frontier<F: Frontier<S, A>>(&mut self, node: &SearchNode<S, A>, frontier: &mut F);

    /// Take the next node to expand out of the frontier.
    fn remove_from_frontier<F: Frontier<S, A>>(
        &mut self,
        space: &SearchSpace<S, A>,
        frontier: &mut F,
    ) -> Option<NodeId>;

    /// Whether there is anything left worth expanding. May discard stale
    /// entries from the frontier.
    fn is_frontier_empty<F: Frontier<S, A>>(
        &mut self,
        space: &SearchSpace<S, A>,
        frontier: &mut F,
    ) -> bool;
}
