//! Benchmark result types.

use serde::{Deserialize, Serialize};

use crate::output;

/// Result of one benchmark: summary statistics plus the retained samples.
///
/// Owned by the caller once returned and immutable from the harness's point
/// of view. All times are seconds per invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchResult {
    /// Benchmark name as reported.
    pub name: String,

    /// Mean time per invocation in seconds.
    pub mean: f64,

    /// Population standard deviation of the per-invocation times, in seconds.
    pub stddev: f64,

    /// The retained per-invocation cost samples, in trial order.
    ///
    /// The length equals the configured `num_samples`; the discarded
    /// cold-start trial is never present here.
    pub samples: Vec<f64>,
}

impl BenchResult {
    /// Relative noise: standard deviation as a percentage of the mean.
    pub fn noise_percent(&self) -> f64 {
        self.stddev / self.mean * 100.0
    }

    /// Throughput in operations per second.
    pub fn throughput(&self) -> f64 {
        1.0 / self.mean
    }

    /// The fixed-column display line for this result.
    pub fn display(&self) -> String {
        output::format_result(&self.name, self.mean, self.stddev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_result() -> BenchResult {
        BenchResult {
            name: "fib".to_string(),
            mean: 0.000002,
            stddev: 0.0000001,
            samples: vec![0.0000019, 0.000002, 0.0000021],
        }
    }

    #[test]
    fn derived_values() {
        let result = make_result();
        assert!((result.noise_percent() - 5.0).abs() < 1e-9);
        assert!((result.throughput() - 500_000.0).abs() < 1e-3);
    }

    #[test]
    fn display_contains_name_and_time() {
        let line = make_result().display();
        assert!(line.contains("fib"));
        assert!(line.contains("2.0 us"));
    }
}
