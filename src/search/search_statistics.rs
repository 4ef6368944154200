use crate::search::{
    Metrics, PathCost, METRIC_MAX_QUEUE_SIZE, METRIC_NODES_EXPANDED, METRIC_PATH_COST,
    METRIC_QUEUE_SIZE,
};
use std::time::Instant;
use tracing::info;

/// Bookkeeping for a single search invocation. Tracks the frontier size and
/// its running maximum, logs progress, and hands out the final [`Metrics`].
#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: i64,
    /// Current number of nodes in the frontier
    queue_size: i64,
    /// Largest frontier size seen so far
    max_queue_size: i64,
    /// Cost of the solution, set once a goal is found
    path_cost: f64,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            queue_size: 0,
            max_queue_size: 0,
            path_cost: 0.,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn update_queue_size(&mut self, queue_size: usize) {
        self.queue_size = queue_size as i64;
        self.max_queue_size = self.max_queue_size.max(self.queue_size);
        self.log_if_needed();
    }

    pub fn set_expanded_nodes(&mut self, expanded_nodes: usize) {
        self.expanded_nodes = expanded_nodes as i64;
        self.log_if_needed();
    }

    pub fn register_solution(&mut self, path_cost: PathCost) {
        self.path_cost = path_cost.into_inner();
        info!(path_cost = self.path_cost, "solution found");
    }

    pub fn max_queue_size(&self) -> i64 {
        self.max_queue_size
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            queue_size = self.queue_size,
            max_queue_size = self.max_queue_size,
        );
    }

    /// Logs the final numbers and turns them into [`Metrics`].
    pub fn finalise_search(self) -> Metrics {
        info!("finalising search");
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());

        let mut metrics = Metrics::new();
        metrics.set_int(METRIC_NODES_EXPANDED, self.expanded_nodes);
        metrics.set_int(METRIC_QUEUE_SIZE, self.queue_size);
        metrics.set_int(METRIC_MAX_QUEUE_SIZE, self.max_queue_size);
        metrics.set_double(METRIC_PATH_COST, self.path_cost);
        metrics
    }
}
