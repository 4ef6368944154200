use crate::search::search_engines::FrontierName;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while configuring a search engine. Not finding a solution is
/// not an error, see [`crate::search::Plan::failure`].
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("failed to read search config {path:?}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse search config")]
    InvalidConfig(#[from] toml::de::Error),
    #[error("early goal check requires a FIFO frontier, got {frontier:?}")]
    EarlyGoalCheckRequiresFifo { frontier: FrontierName },
}
