//! Measurement infrastructure: clock access, calibration, sample collection.
//!
//! Two clocks are read for every batch and used asymmetrically:
//!
//! - **Wall time** drives calibration, deciding when a trial batch is long
//!   enough to amortize timer granularity.
//! - **CPU time** produces every retained per-invocation cost, because wall
//!   time also picks up scheduling noise from unrelated processes.
//!
//! This split is deliberate, not an inconsistency to simplify away.

mod calibrate;
mod clock;
mod sampler;

pub use calibrate::{batch_size_for, estimate_batch_size, estimate_ops_per_second};
pub use clock::{black_box, BatchTiming, Clock};
pub use sampler::collect_samples;
