//! Named counters describing one search run.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Display;

pub const METRIC_NODES_EXPANDED: &str = "nodesExpanded";
pub const METRIC_QUEUE_SIZE: &str = "queueSize";
pub const METRIC_MAX_QUEUE_SIZE: &str = "maxQueueSize";
pub const METRIC_PATH_COST: &str = "pathCost";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Int(i64),
    Float(f64),
}

impl MetricValue {
    pub fn as_int(&self) -> i64 {
        match *self {
            MetricValue::Int(value) => value,
            MetricValue::Float(value) => value as i64,
        }
    }

    pub fn as_double(&self) -> f64 {
        match *self {
            MetricValue::Int(value) => value as f64,
            MetricValue::Float(value) => value,
        }
    }
}

impl Display for MetricValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricValue::Int(value) => write!(f, "{}", value),
            MetricValue::Float(value) => write!(f, "{}", value),
        }
    }
}

/// A flat mapping from metric name to value. Serialises as a plain object,
/// e.g. `{"maxQueueSize":2,"nodesExpanded":2,"pathCost":2.0,"queueSize":0}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Metrics {
    values: BTreeMap<String, MetricValue>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_int(&mut self, name: &str, value: i64) {
        self.values.insert(name.to_string(), MetricValue::Int(value));
    }

    pub fn set_double(&mut self, name: &str, value: f64) {
        self.values.insert(name.to_string(), MetricValue::Float(value));
    }

    pub fn get(&self, name: &str) -> Option<MetricValue> {
        self.values.get(name).copied()
    }

    /// Value of the metric as an integer, 0 if it was never set.
    pub fn get_int(&self, name: &str) -> i64 {
        self.get(name).map_or(0, |value| value.as_int())
    }

    /// Value of the metric as a float, 0 if it was never set.
    pub fn get_double(&self, name: &str) -> f64 {
        self.get(name).map_or(0., |value| value.as_double())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// All metrics rendered as strings, keyed by name.
    pub fn instrumentation(&self) -> BTreeMap<String, String> {
        self.values
            .iter()
            .map(|(name, value)| (name.clone(), value.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_metrics_read_as_zero() {
        let metrics = Metrics::new();
        assert_eq!(metrics.get(METRIC_NODES_EXPANDED), None);
        assert_eq!(metrics.get_int(METRIC_NODES_EXPANDED), 0);
        assert_eq!(metrics.get_double(METRIC_PATH_COST), 0.);
    }

    #[test]
    fn values_convert_between_int_and_double() {
        let mut metrics = Metrics::new();
        metrics.set_int(METRIC_QUEUE_SIZE, 3);
        metrics.set_double(METRIC_PATH_COST, 2.5);

        assert_eq!(metrics.get_double(METRIC_QUEUE_SIZE), 3.);
        assert_eq!(metrics.get_int(METRIC_PATH_COST), 2);
        assert_eq!(
            metrics.keys().collect::<Vec<_>>(),
            vec![METRIC_PATH_COST, METRIC_QUEUE_SIZE]
        );
    }

    #[test]
    fn instrumentation_renders_strings() {
        let mut metrics = Metrics::new();
        metrics.set_int(METRIC_NODES_EXPANDED, 7);
        metrics.set_double(METRIC_PATH_COST, 1.5);

        let instrumentation = metrics.instrumentation();
        assert_eq!(instrumentation[METRIC_NODES_EXPANDED], "7");
        assert_eq!(instrumentation[METRIC_PATH_COST], "1.5");
    }

    #[test]
    fn serialises_as_flat_object() {
        let mut metrics = Metrics::new();
        metrics.set_int(METRIC_NODES_EXPANDED, 2);
        metrics.set_double(METRIC_PATH_COST, 2.);

        assert_eq!(
            serde_json::to_string(&metrics).unwrap(),
            r#"{"nodesExpanded":2,"pathCost":2.0}"#
        );
    }
}
