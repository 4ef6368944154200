mod frontier;
mod graph_search;
mod graph_search_bfs;
mod queue_search;
mod queue_strategy;
mod search_engine;
mod tree_search;

pub use frontier::{
    EvaluationFunction, FifoFrontier, Frontier, FrontierOrdering, LifoFrontier, PriorityFrontier,
};
pub use graph_search::GraphSearch;
pub use graph_search_bfs::GraphSearchBfs;
pub use queue_search::QueueSearch;
pub use queue_strategy::QueueStrategy;
pub use search_engine::{FrontierName, SearchConfig, SearchEngine, SearchStrategyName};
pub use tree_search::TreeSearch;
