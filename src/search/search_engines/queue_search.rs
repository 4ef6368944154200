//! The generic queue-based search loop shared by tree search and the graph
//! search variants. The loop is written once; what happens to repeated states
//! is decided by the [`QueueStrategy`], and the expansion order by the
//! [`Frontier`].

use crate::search::{
    search_engines::{FifoFrontier, Frontier, QueueStrategy, SearchEngine},
    search_utils::{failure, is_goal_state, sequence_of_actions},
    Action, Metrics, NodeExpander, NodeId, Plan, Problem, SearchSpace, SearchStatistics,
};
use tracing::{debug, info};

/// Queue-based search over a [`Problem`], e.g. for the chain `A -> B -> C`:
///
/// ```
/// use queue_search::search::search_engines::{
///     FifoFrontier, GraphSearch, GraphSearchBfs, QueueSearch, TreeSearch,
/// };
/// use queue_search::search::{DynamicAction, Problem, METRIC_NODES_EXPANDED};
///
/// let problem = Problem::new(
///     'A',
///     |state: &char| -> Vec<DynamicAction> {
///         match state {
///             'A' => vec![DynamicAction::new("Go(A,B)")],
///             'B' => vec![DynamicAction::new("Go(B,C)")],
///             _ => vec![],
///         }
///     },
///     |state: &char, _: &DynamicAction| -> char {
///         if *state == 'A' {
///             'B'
///         } else {
///             'C'
///         }
///     },
///     |state: &char| *state == 'C',
/// );
///
/// let mut search = QueueSearch::new(TreeSearch::new(), FifoFrontier::new());
/// let (plan, metrics) = search.search(&problem);
/// assert_eq!(plan.len(), 2);
/// assert_eq!(metrics.get_int(METRIC_NODES_EXPANDED), 2);
///
/// let (plan, _) = QueueSearch::new(GraphSearch::new(), FifoFrontier::new()).search(&problem);
/// assert_eq!(plan[1].name(), "Go(B,C)");
///
/// let mut search = QueueSearch::new(GraphSearchBfs::new(), FifoFrontier::new())
///     .with_early_goal_check();
/// let (plan, metrics) = search.search(&problem);
/// assert_eq!(plan.len(), 2);
/// assert_eq!(metrics.get_int(METRIC_NODES_EXPANDED), 2);
/// ```
#[derive(Debug)]
pub struct QueueSearch<S, A, St, F> {
    node_expander: NodeExpander<S, A>,
    strategy: St,
    frontier: F,
    /// Test nodes for the goal when they are generated instead of when they
    /// are removed from the frontier. Only available for FIFO frontiers.
    early_goal_check: bool,
}

impl<S, A, St, F> QueueSearch<S, A, St, F>
where
    S: Clone,
    A: Action,
    St: QueueStrategy<S, A>,
    F: Frontier<S, A>,
{
    pub fn new(strategy: St, frontier: F) -> Self {
        Self::with_node_expander(strategy, frontier, NodeExpander::new())
    }

    pub fn with_node_expander(
        strategy: St,
        frontier: F,
        node_expander: NodeExpander<S, A>,
    ) -> Self {
        Self {
            node_expander,
            strategy,
            frontier,
            early_goal_check: false,
        }
    }

    pub fn node_expander(&self) -> &NodeExpander<S, A> {
        &self.node_expander
    }

    pub fn node_expander_mut(&mut self) -> &mut NodeExpander<S, A> {
        &mut self.node_expander
    }

    pub fn strategy(&self) -> &St {
        &self.strategy
    }

    pub fn is_early_goal_check(&self) -> bool {
        self.early_goal_check
    }

    /// Returns the actions leading to a goal if one was found, a single no-op
    /// if the initial state is already a goal, or an empty plan if the
    /// frontier ran dry. The metrics describe this call only.
    pub fn search(&mut self, problem: &Problem<S, A>) -> (Plan<A>, Metrics) {
        self.strategy.reset();
        self.frontier.clear();
        self.node_expander.reset_counter();
        let mut statistics = SearchStatistics::new();
        let mut space = SearchSpace::new();

        let root = self
            .node_expander
            .create_root_node(&mut space, problem.initial_state().clone());
        if self.early_goal_check && is_goal_state(problem, &space, root) {
            return self.solution(&space, root, statistics);
        }
        self.add_to_frontier(&space, root, &mut statistics);

        while !self.is_frontier_empty(&space, &mut statistics) {
            let Some(node_id) = self.strategy.remove_from_frontier(&space, &mut self.frontier)
            else {
                break;
            };
            statistics.update_queue_size(self.frontier.len());

            // With early goal checks the node was already tested when it was
            // generated.
            if !self.early_goal_check && is_goal_state(problem, &space, node_id) {
                return self.solution(&space, node_id, statistics);
            }

            let successors = self.node_expander.expand(&mut space, node_id, problem);
            statistics.set_expanded_nodes(self.node_expander.num_of_expand_calls());
            for successor in successors {
                if self.early_goal_check && is_goal_state(problem, &space, successor) {
                    return self.solution(&space, successor, statistics);
                }
                self.add_to_frontier(&space, successor, &mut statistics);
            }
        }

        info!(generated_nodes = space.len(), "frontier exhausted, no solution");
        statistics.set_expanded_nodes(self.node_expander.num_of_expand_calls());
        (failure(), statistics.finalise_search())
    }

    fn add_to_frontier(
        &mut self,
        space: &SearchSpace<S, A>,
        node_id: NodeId,
        statistics: &mut SearchStatistics,
    ) {
        self.strategy.add_to_frontier(space.get_node(node_id), &mut self.frontier);
        statistics.update_queue_size(self.frontier.len());
    }

    fn is_frontier_empty(
        &mut self,
        space: &SearchSpace<S, A>,
        statistics: &mut SearchStatistics,
    ) -> bool {
        let is_empty = self.strategy.is_frontier_empty(space, &mut self.frontier);
        statistics.update_queue_size(self.frontier.len());
        is_empty
    }

    fn solution(
        &self,
        space: &SearchSpace<S, A>,
        node_id: NodeId,
        mut statistics: SearchStatistics,
    ) -> (Plan<A>, Metrics) {
        let node = space.get_node(node_id);
        debug!(node_id = node_id.id(), depth = node.get_depth(), "goal reached");
        statistics.set_expanded_nodes(self.node_expander.num_of_expand_calls());
        statistics.register_solution(node.get_path_cost());
        (sequence_of_actions(space, node_id), statistics.finalise_search())
    }
}

impl<S, A, St> QueueSearch<S, A, St, FifoFrontier>
where
    S: Clone,
    A: Action,
    St: QueueStrategy<S, A>,
{
    /// Test nodes for the goal as soon as they are generated. This saves one
    /// layer of expansions in breadth-first order; with any other order it
    /// could return a worse solution, hence it is only offered for
    /// [`FifoFrontier`].
    pub fn with_early_goal_check(mut self) -> Self {
        self.early_goal_check = true;
        self
    }
}

impl<S, A, St, F> SearchEngine<S, A> for QueueSearch<S, A, St, F>
where
    S: Clone,
    A: Action,
    St: QueueStrategy<S, A>,
    F: Frontier<S, A>,
{
    fn search(&mut self, problem: &Problem<S, A>) -> (Plan<A>, Metrics) {
        QueueSearch::search(self, problem)
    }

    fn node_expander_mut(&mut self) -> &mut NodeExpander<S, A> {
        &mut self.node_expander
    }
}
