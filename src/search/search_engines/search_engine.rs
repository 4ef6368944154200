use crate::search::{
    search_engines::{
        FifoFrontier, GraphSearch, GraphSearchBfs, LifoFrontier, PriorityFrontier, QueueSearch,
        QueueStrategy, TreeSearch,
    },
    Action, Metrics, NodeExpander, Plan, Problem, SearchError,
};
use serde::{Deserialize, Serialize};
use std::hash::Hash;
use std::path::Path;

/// A search engine that looks for a sequence of actions.
pub trait SearchEngine<S, A> {
    /// Returns a plan reaching a goal, a single no-op if the initial state is
    /// already a goal, or an empty plan if no goal is reachable. Every call
    /// starts from scratch.
    fn search(&mut self, problem: &Problem<S, A>) -> (Plan<A>, Metrics);

    /// Allows registering listeners on the engine's node expander.
    fn node_expander_mut(&mut self) -> &mut NodeExpander<S, A>;
}

/// How repeated states are dealt with.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategyName {
    #[clap(help = "Tree search, states may be expanded repeatedly.")]
    Tree,
    #[clap(help = "Graph search with an explored set.")]
    Graph,
    #[clap(help = "Graph search that also keeps duplicates out of the frontier, \
        meant for breadth-first order.")]
    GraphBfs,
}

/// The order in which nodes leave the frontier.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FrontierName {
    #[default]
    #[clap(help = "First in, first out (breadth first).")]
    Fifo,
    #[clap(help = "Last in, first out (depth first).")]
    Lifo,
    #[clap(help = "Lowest path cost first.")]
    UniformCost,
}

/// Configuration of a queue-based search engine, e.g.
///
/// ```toml
/// strategy = "graph-bfs"
/// frontier = "fifo"
/// early-goal-check = true
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SearchConfig {
    pub strategy: SearchStrategyName,
    #[serde(default)]
    pub frontier: FrontierName,
    #[serde(default)]
    pub early_goal_check: bool,
}

impl SearchConfig {
    pub fn new(strategy: SearchStrategyName, frontier: FrontierName) -> Self {
        Self {
            strategy,
            frontier,
            early_goal_check: false,
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, SearchError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, SearchError> {
        let text = std::fs::read_to_string(path).map_err(|source| SearchError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Build the configured engine. Early goal checks are refused unless the
    /// frontier is FIFO.
    pub fn create<S, A>(&self) -> Result<Box<dyn SearchEngine<S, A>>, SearchError>
    where
        S: Clone + Eq + Hash + 'static,
        A: Action + 'static,
    {
        if self.early_goal_check && self.frontier != FrontierName::Fifo {
            return Err(SearchError::EarlyGoalCheckRequiresFifo {
                frontier: self.frontier,
            });
        }
        match self.strategy {
            SearchStrategyName::Tree => Ok(self.create_with(TreeSearch::new())),
            SearchStrategyName::Graph => Ok(self.create_with(GraphSearch::new())),
            SearchStrategyName::GraphBfs => Ok(self.create_with(GraphSearchBfs::new())),
        }
    }

    fn create_with<S, A, St>(&self, strategy: St) -> Box<dyn SearchEngine<S, A>>
    where
        S: Clone + 'static,
        A: Action + 'static,
        St: QueueStrategy<S, A> + 'static,
    {
        match self.frontier {
            FrontierName::Fifo if self.early_goal_check => {
                Box::new(QueueSearch::new(strategy, FifoFrontier::new()).with_early_goal_check())
            }
            FrontierName::Fifo => Box::new(QueueSearch::new(strategy, FifoFrontier::new())),
            FrontierName::Lifo => Box::new(QueueSearch::new(strategy, LifoFrontier::new())),
            FrontierName::UniformCost => {
                Box::new(QueueSearch::new(strategy, PriorityFrontier::uniform_cost()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{DynamicAction, METRIC_NODES_EXPANDED, METRIC_PATH_COST};
    use crate::test_utils::*;

    #[test]
    fn config_is_read_from_toml() {
        let config = SearchConfig::from_toml_str(
            r#"
            strategy = "graph-bfs"
            frontier = "fifo"
            early-goal-check = true
            "#,
        )
        .unwrap();
        assert_eq!(config.strategy, SearchStrategyName::GraphBfs);
        assert_eq!(config.frontier, FrontierName::Fifo);
        assert!(config.early_goal_check);
    }

    #[test]
    fn frontier_and_early_goal_check_are_optional() {
        let config = SearchConfig::from_toml_str(r#"strategy = "tree""#).unwrap();
        assert_eq!(config, SearchConfig::new(SearchStrategyName::Tree, FrontierName::Fifo));
    }

    #[test]
    fn invalid_toml_is_reported() {
        let result = SearchConfig::from_toml_str(r#"strategy = "best-first""#);
        assert!(matches!(result, Err(SearchError::InvalidConfig(_))));

        let result = SearchConfig::from_toml_str("strategy = \"tree\"\ndepth = 3");
        assert!(matches!(result, Err(SearchError::InvalidConfig(_))));
    }

    #[test]
    fn missing_config_file_is_reported() {
        let result = SearchConfig::from_path(Path::new("/nonexistent/search.toml"));
        assert!(matches!(result, Err(SearchError::ReadConfig { .. })));
    }

    #[test]
    fn early_goal_check_needs_fifo_frontier() {
        let config = SearchConfig {
            strategy: SearchStrategyName::Graph,
            frontier: FrontierName::UniformCost,
            early_goal_check: true,
        };
        let result = config.create::<char, DynamicAction>();
        assert!(matches!(
            result,
            Err(SearchError::EarlyGoalCheckRequiresFifo {
                frontier: FrontierName::UniformCost
            })
        ));
    }

    #[test]
    fn every_configuration_solves_the_chain() {
        let problem = chain_problem();
        for strategy in [
            SearchStrategyName::Tree,
            SearchStrategyName::Graph,
            SearchStrategyName::GraphBfs,
        ] {
            for frontier in [FrontierName::Fifo, FrontierName::Lifo, FrontierName::UniformCost] {
                let mut engine = SearchConfig::new(strategy, frontier)
                    .create::<char, DynamicAction>()
                    .unwrap();
                let (plan, metrics) = engine.search(&problem);
                assert_eq!(plan.len(), 2, "{:?} with {:?}", strategy, frontier);
                assert_eq!(metrics.get_int(METRIC_NODES_EXPANDED), 2);
                assert_eq!(metrics.get_double(METRIC_PATH_COST), 2.);
            }
        }
    }

    #[test]
    fn value_enum_names_are_kebab_case() {
        use clap::ValueEnum;
        assert_eq!(
            SearchStrategyName::GraphBfs
                .to_possible_value()
                .unwrap()
                .get_name(),
            "graph-bfs"
        );
        assert_eq!(
            FrontierName::UniformCost.to_possible_value().unwrap().get_name(),
            "uniform-cost"
        );
    }
}
