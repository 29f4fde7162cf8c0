//! Trial execution and per-invocation cost collection.

use crate::error::Error;

use super::clock::Clock;

/// Collect `num_samples` per-invocation CPU costs for `op`.
///
/// Runs `num_samples + 1` identical trials; each trial executes `batch_size`
/// back-to-back invocations and records the batch CPU time divided by
/// `batch_size`. The first trial's cost is then dropped: it is assumed
/// contaminated by cold-start effects (instruction-cache warm-up, lazy
/// allocation, on-demand compilation) that do not represent steady-state
/// cost.
///
/// Only CPU time feeds the retained costs; wall time is used during
/// calibration only.
///
/// # Errors
///
/// Propagates [`Error::ClockUnavailable`] from the underlying clock.
pub fn collect_samples<F, T>(
    clock: &Clock,
    op: &mut F,
    batch_size: usize,
    num_samples: usize,
) -> Result<Vec<f64>, Error>
where
    F: FnMut() -> T,
{
    let mut costs = Vec::with_capacity(num_samples + 1);
    for _ in 0..num_samples + 1 {
        let timing = clock.measure(op, batch_size)?;
        costs.push(timing.cpu / batch_size as f64);
    }

    // Uniform trial loop above, explicit discard here: the cold-start trial
    // is removed as a post-processing step rather than special-cased in the
    // loop.
    costs.remove(0);
    Ok(costs)
}
