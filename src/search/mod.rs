mod action;
mod error;
mod goal;
mod metrics;
mod node_expander;
mod plan;
mod problem;
pub mod search_engines;
mod search_node;
mod search_space;
mod search_statistics;
pub mod search_utils;

pub use action::{Action, DynamicAction};
pub use error::SearchError;
pub use goal::{DefaultGoalTest, GoalTest, SolutionChecker};
pub use metrics::{
    MetricValue, Metrics, METRIC_MAX_QUEUE_SIZE, METRIC_NODES_EXPANDED, METRIC_PATH_COST,
    METRIC_QUEUE_SIZE,
};
pub use node_expander::{NodeExpander, NodeListener};
pub use plan::Plan;
pub use problem::{
    ActionsFunction, DefaultStepCost, Problem, ResultFunction, StepCostFunction,
};
pub use search_node::{NodeId, PathCost, SearchNode, NO_NODE};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
