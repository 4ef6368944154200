//! Queues holding the generated but not yet expanded nodes. The search
//! engine does not care about the order in which nodes leave the frontier,
//! only the frontier implementation does.

use crate::search::{NodeId, PathCost, SearchNode};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::collections::VecDeque;

/// The order in which a frontier hands out its nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierOrdering {
    /// First in, first out (breadth first)
    Fifo,
    /// Last in, first out (depth first)
    Lifo,
    /// Lowest evaluation first
    Priority,
}

pub trait Frontier<S, A> {
    fn push(&mut self, node: &SearchNode<S, A>);

    fn pop(&mut self) -> Option<NodeId>;

    /// The node [`Frontier::pop`] would return next.
    fn peek(&self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    fn ordering(&self) -> FrontierOrdering;
}

#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S, A> Frontier<S, A> for FifoFrontier {
    fn push(&mut self, node: &SearchNode<S, A>) {
        self.queue.push_back(node.get_node_id());
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn peek(&self) -> Option<NodeId> {
        self.queue.front().copied()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }

    fn ordering(&self) -> FrontierOrdering {
        FrontierOrdering::Fifo
    }
}

#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
}

impl LifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S, A> Frontier<S, A> for LifoFrontier {
    fn push(&mut self, node: &SearchNode<S, A>) {
        self.stack.push(node.get_node_id());
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn peek(&self) -> Option<NodeId> {
        self.stack.last().copied()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn clear(&mut self) {
        self.stack.clear();
    }

    fn ordering(&self) -> FrontierOrdering {
        FrontierOrdering::Lifo
    }
}

/// Evaluation function used to order a [`PriorityFrontier`].
pub type EvaluationFunction<S, A> = Box<dyn Fn(&SearchNode<S, A>) -> PathCost>;

/// Frontier handing out the node with the lowest evaluation first. Nodes with
/// equal evaluation leave in the order they were pushed.
pub struct PriorityFrontier<S, A> {
    queue: PriorityQueue<NodeId, Reverse<(PathCost, usize)>>,
    evaluation: EvaluationFunction<S, A>,
    /// Number of pushes since the last clear, used for tie breaking
    pushed: usize,
}

impl<S, A> PriorityFrontier<S, A> {
    pub fn new(evaluation: impl Fn(&SearchNode<S, A>) -> PathCost + 'static) -> Self {
        Self {
            queue: PriorityQueue::new(),
            evaluation: Box::new(evaluation),
            pushed: 0,
        }
    }

    /// Orders nodes by path cost, i.e. uniform cost search.
    pub fn uniform_cost() -> Self {
        Self::new(|node| node.get_path_cost())
    }
}

impl<S, A> Frontier<S, A> for PriorityFrontier<S, A> {
    fn push(&mut self, node: &SearchNode<S, A>) {
        let priority = (self.evaluation)(node);
        self.queue.push(node.get_node_id(), Reverse((priority, self.pushed)));
        self.pushed += 1;
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop().map(|(node_id, _)| node_id)
    }

    fn peek(&self) -> Option<NodeId> {
        self.queue.peek().map(|(&node_id, _)| node_id)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
        self.pushed = 0;
    }

    fn ordering(&self) -> FrontierOrdering {
        FrontierOrdering::Priority
    }
}

impl<S, A> std::fmt::Debug for PriorityFrontier<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriorityFrontier")
            .field("len", &self.queue.len())
            .field("pushed", &self.pushed)
            .finish_non_exhaustive()
    }
}
