//! Console logging backend.

use super::MetricLogger;
use std::collections::HashMap;

/// Logger that prints metrics through tracing.
pub struct ConsoleLogger {
    prefix: String,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new("Episode")
    }
}

impl ConsoleLogger {
    /// `prefix` labels the step counter, e.g. "Episode 3: score=2.0000"
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Format metrics as `"<prefix> <step>: a=1.0000, b=2.0000"`, keys sorted
    pub fn format_metrics(&self, metrics: &HashMap<String, f64>, step: u64) -> String {
        let mut sorted: Vec<_> = metrics.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));

        let fields: Vec<String> = sorted
            .into_iter()
            .map(|(key, value)| format!("{}={:.4}", key, value))
            .collect();
        format!("{} {}: {}", self.prefix, step, fields.join(", "))
    }
}

impl MetricLogger for ConsoleLogger {
    fn log_scalar(&self, name: &str, value: f64, step: u64) {
        tracing::info!("{} {}: {} = {:.4}", self.prefix, step, name, value);
    }

    fn log_metrics(&self, metrics: &HashMap<String, f64>, step: u64) {
        tracing::info!("{}", self.format_metrics(metrics, step));
    }
}
