//! Error types for the benchmarking harness.

use std::io;

use thiserror::Error;

/// Errors that can occur while configuring or running a benchmark.
#[derive(Debug, Error)]
pub enum Error {
    /// The process CPU clock could not be read.
    ///
    /// This is fatal: without a working clock the measurement is meaningless,
    /// so there is no fallback timing strategy and no retry.
    #[error("process CPU clock unavailable: {source}")]
    ClockUnavailable {
        /// The underlying OS error from the clock read.
        #[source]
        source: io::Error,
    },

    /// The configured sample count was zero.
    ///
    /// At least one retained sample is required for statistics. Rejected at
    /// configuration validation, before any measurement runs.
    #[error("num_samples must be greater than zero (got {count})")]
    InvalidSampleCount {
        /// The invalid sample count that was provided.
        count: usize,
    },
}
