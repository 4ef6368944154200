//! Node creation and expansion. The [`NodeExpander`] computes path costs,
//! informs listeners about expanded nodes and counts the number of
//! [`NodeExpander::expand`] calls.

use crate::search::{NodeId, Problem, SearchNode, SearchSpace};
use tracing::trace;

/// Callback informed whenever a node is expanded. Listeners observe the node
/// only, they run synchronously on the searching thread.
pub type NodeListener<S, A> = Box<dyn FnMut(&SearchNode<S, A>)>;

pub struct NodeExpander<S, A> {
    node_listeners: Vec<NodeListener<S, A>>,
    /// Number of expand calls since the last reset
    counter: usize,
}

impl<S, A> Default for NodeExpander<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> NodeExpander<S, A> {
    pub fn new() -> Self {
        Self {
            node_listeners: Vec::new(),
            counter: 0,
        }
    }

    pub fn create_root_node(&self, space: &mut SearchSpace<S, A>, state: S) -> NodeId {
        space.insert_root(state)
    }

    /// Create a node for `state` reached from `parent_id` via `action`; its
    /// path cost is the parent's plus `step_cost`.
    pub fn create_node(
        &self,
        space: &mut SearchSpace<S, A>,
        state: S,
        parent_id: NodeId,
        action: A,
        step_cost: f64,
    ) -> NodeId {
        space.insert_child(state, parent_id, action, step_cost)
    }

    /// Returns the children obtained from expanding the given node, one per
    /// applicable action, in the order the problem lists the actions.
    /// Listeners are informed only after all children have been created.
    pub fn expand(
        &mut self,
        space: &mut SearchSpace<S, A>,
        node_id: NodeId,
        problem: &Problem<S, A>,
    ) -> Vec<NodeId> {
        let successors: Vec<(S, A, f64)> = {
            let state = space.get_state(node_id);
            problem
                .actions(state)
                .into_iter()
                .map(|action| {
                    let successor = problem.result(state, &action);
                    let step_cost = problem.step_cost(state, &action, &successor);
                    (successor, action, step_cost)
                })
                .collect()
        };

        let children: Vec<NodeId> = successors
            .into_iter()
            .map(|(successor, action, step_cost)| {
                self.create_node(space, successor, node_id, action, step_cost)
            })
            .collect();

        let node = space.get_node(node_id);
        for listener in self.node_listeners.iter_mut() {
            listener(node);
        }
        self.counter += 1;
        trace!(
            node_id = node_id.id(),
            children = children.len(),
            expansions = self.counter
        );

        children
    }

    /// Registers a listener. Listeners are informed in registration order.
    pub fn add_node_listener(&mut self, listener: impl FnMut(&SearchNode<S, A>) + 'static) {
        self.node_listeners.push(Box::new(listener));
    }

    pub fn reset_counter(&mut self) {
        self.counter = 0;
    }

    /// Number of expand calls since the last counter reset.
    pub fn num_of_expand_calls(&self) -> usize {
        self.counter
    }
}

impl<S, A> std::fmt::Debug for NodeExpander<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeExpander")
            .field("node_listeners", &self.node_listeners.len())
            .field("counter", &self.counter)
            .finish()
    }
}
