//! Main `Harness` entry point: calibrate, sample, summarize, report.

use crate::config::Config;
use crate::error::Error;
use crate::measurement::{collect_samples, estimate_batch_size, Clock};
use crate::output::Reporter;
use crate::result::BenchResult;
use crate::statistics;

/// Main entry point for benchmarking.
///
/// Holds the configuration and drives the measurement pipeline for each
/// operation: calibrate a batch size, collect per-invocation costs,
/// summarize, report.
///
/// # Example
///
/// ```ignore
/// use microbench::Harness;
///
/// let harness = Harness::new().num_samples(10);
/// let result = harness.run("fibonacci(20)", || fibonacci(20))?;
/// println!("mean: {:.1} us", result.mean * 1e6);
/// ```
///
/// Every benchmark run is independent: the batch size is calibrated fresh
/// per operation and no measurement state is shared or reused. Execution is
/// strictly single-threaded and synchronous; a non-returning operation hangs
/// the harness, by design.
#[derive(Debug, Clone, Default)]
pub struct Harness {
    config: Config,
    clock: Clock,
    reporter: Reporter,
}

impl Harness {
    /// Create with default configuration (5 samples, 3.0 s per trial).
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create with an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            clock: Clock::new(),
            reporter: Reporter::new(),
        }
    }

    /// Create with a fast configuration for tests and calibration suites.
    ///
    /// Settings:
    /// - 3 retained samples (vs 5 default)
    /// - 0.02 s per trial (vs 3.0 s default)
    /// - 0.002 s minimum reliable window (vs 0.05 s default)
    pub fn quick() -> Self {
        Self::with_config(Config {
            num_samples: 3,
            seconds_per_run: 0.02,
            min_reliable_window: 0.002,
        })
    }

    /// Set the number of retained samples per benchmark.
    pub fn num_samples(mut self, n: usize) -> Self {
        self.config.num_samples = n;
        self
    }

    /// Set the target measurement window per trial, in seconds.
    pub fn seconds_per_run(mut self, secs: f64) -> Self {
        self.config.seconds_per_run = secs;
        self
    }

    /// Set the minimum reliable calibration window, in seconds.
    pub fn min_reliable_window(mut self, secs: f64) -> Self {
        self.config.min_reliable_window = secs;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Emit a `category::` annotation grouping the results that follow.
    ///
    /// Touches no measurement state.
    pub fn category(&self, name: &str) {
        self.reporter.category(name);
    }

    /// Benchmark a zero-argument operation.
    ///
    /// Calibrates a batch size for `op`, runs `num_samples + 1` trials
    /// (discarding the first), computes mean and population standard
    /// deviation over the retained per-invocation CPU costs, and emits the
    /// formatted result through both output channels.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidSampleCount`] if the configuration holds
    ///   `num_samples == 0` (checked before any measurement).
    /// - [`Error::ClockUnavailable`] if the CPU clock cannot be read.
    ///
    /// Panics from `op` propagate unmodified; a failed invocation's duration
    /// is never recorded.
    pub fn run<F, T>(&self, name: &str, mut op: F) -> Result<BenchResult, Error>
    where
        F: FnMut() -> T,
    {
        self.config.validate()?;

        let batch_size = estimate_batch_size(
            &self.clock,
            &mut op,
            self.config.min_reliable_window,
            self.config.seconds_per_run,
        )?;
        let samples = collect_samples(&self.clock, &mut op, batch_size, self.config.num_samples)?;

        let result = BenchResult {
            name: name.to_string(),
            mean: statistics::mean(&samples),
            stddev: statistics::stddev(&samples),
            samples,
        };
        self.reporter.emit(name, &result.display());
        Ok(result)
    }

    /// Benchmark each input in order and return the formatted result lines.
    ///
    /// For each input, derives an integer magnitude label via `size_fn`,
    /// names the benchmark `"<name_prefix> (<label>)"`, wraps `run_fn` over
    /// that input as a zero-argument operation, and runs the full pipeline.
    /// Inputs are executed strictly in sequence order and the returned lines
    /// preserve it.
    ///
    /// # Errors
    ///
    /// Fails on the first erroring benchmark; earlier results are already
    /// emitted and unaffected, since each operation's measurement state is
    /// independent.
    pub fn run_sweep<T, R, F, S>(
        &self,
        name_prefix: &str,
        mut run_fn: F,
        size_fn: S,
        inputs: &[T],
    ) -> Result<Vec<String>, Error>
    where
        F: FnMut(&T) -> R,
        S: Fn(&T) -> u64,
    {
        let mut lines = Vec::with_capacity(inputs.len());
        for input in inputs {
            let name = format!("{} ({})", name_prefix, size_fn(input));
            let result = self.run(&name, || run_fn(input))?;
            lines.push(result.display());
        }
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_retains_configured_sample_count() {
        let result = Harness::quick().run("noop", || ()).unwrap();
        assert_eq!(result.samples.len(), 3);
        assert!(result.samples.iter().all(|&s| s >= 0.0));
    }

    #[test]
    fn zero_samples_rejected_before_measurement() {
        let harness = Harness::quick().num_samples(0);
        let err = harness.run("noop", || ()).unwrap_err();
        assert!(matches!(err, Error::InvalidSampleCount { count: 0 }));
    }

    #[test]
    fn sweep_preserves_input_order() {
        let lines = Harness::quick()
            .run_sweep("ident", |&n| n, |&n| n, &[1u64, 2, 3])
            .unwrap();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("ident (1)"));
        assert!(lines[1].contains("ident (2)"));
        assert!(lines[2].contains("ident (3)"));
    }

    #[test]
    fn chained_setters_override_config() {
        let harness = Harness::new()
            .num_samples(7)
            .seconds_per_run(1.5)
            .min_reliable_window(0.01);

        assert_eq!(harness.config().num_samples, 7);
        assert_eq!(harness.config().seconds_per_run, 1.5);
        assert_eq!(harness.config().min_reliable_window, 0.01);
    }
}
