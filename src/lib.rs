//! # microbench
//!
//! Adaptive statistical micro-benchmarking harness.
//!
//! Measures the wall/CPU cost of an arbitrary zero-argument operation with
//! enough precision to compare implementations, compensating automatically
//! for timer resolution, warm-up effects, and run-to-run noise:
//!
//! - **Calibration**: trial batches are doubled until they occupy a reliably
//!   measurable wall-clock window, then sized to fill the configured
//!   measurement window. Sub-microsecond operations are never timed one
//!   invocation at a time.
//! - **Warm-up discard**: one extra trial is always run and dropped, so
//!   cold-start effects (cache warm-up, lazy initialization, on-demand
//!   compilation) never bias the statistics.
//! - **Noise reduction**: retained per-invocation costs come from the
//!   process CPU clock, which unrelated-process scheduling noise cannot
//!   touch; wall time is used only to decide when a calibration batch is
//!   long enough.
//!
//! ## Quick Start
//!
//! ```ignore
//! // One operation:
//! let line = microbench::benchmark("parse config", || parse(&input))?;
//!
//! // A parametrized sweep over input sizes:
//! let lines = microbench::run_sweep(
//!     "sort",
//!     |n| sort(&make_input(*n)),
//!     |n| *n,
//!     &[1_000, 10_000, 100_000],
//! )?;
//! ```
//!
//! Results are printed for interactive use and mirrored as `result::` /
//! `category::` marker lines on the `tracing` sink for machine extraction.
//!
//! ## Configuration
//!
//! [`Harness`] exposes every knob explicitly:
//!
//! ```ignore
//! use microbench::Harness;
//!
//! let result = Harness::new()
//!     .num_samples(10)        // retained trials (default 5)
//!     .seconds_per_run(1.0)   // target window per trial (default 3.0)
//!     .run("decode frame", || decode(&frame))?;
//! ```
//!
//! ## Contract
//!
//! Operations must be safely repeatable without accumulating unbounded
//! state; the harness cannot enforce this. Execution is single-threaded and
//! synchronous with no timeout: an operation that never returns hangs the
//! harness. Panics from the operation propagate unmodified.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod error;
mod result;
mod runner;

pub mod measurement;
pub mod output;
pub mod statistics;

pub use config::Config;
pub use error::Error;
pub use measurement::{black_box, BatchTiming, Clock};
pub use output::{Reporter, CATEGORY_MARKER, RESULT_MARKER};
pub use result::BenchResult;
pub use runner::Harness;

/// Benchmark a zero-argument operation under the default configuration and
/// return its formatted result line.
///
/// Convenience over [`Harness::run`]; the result is also emitted through
/// both output channels.
///
/// # Errors
///
/// See [`Harness::run`].
pub fn benchmark<F, T>(name: &str, op: F) -> Result<String, Error>
where
    F: FnMut() -> T,
{
    Harness::new().run(name, op).map(|result| result.display())
}

/// Benchmark each input in order under the default configuration and return
/// the formatted result lines in input order.
///
/// Convenience over [`Harness::run_sweep`].
///
/// # Errors
///
/// See [`Harness::run_sweep`].
pub fn run_sweep<T, R, F, S>(
    name_prefix: &str,
    run_fn: F,
    size_fn: S,
    inputs: &[T],
) -> Result<Vec<String>, Error>
where
    F: FnMut(&T) -> R,
    S: Fn(&T) -> u64,
{
    Harness::new().run_sweep(name_prefix, run_fn, size_fn, inputs)
}
