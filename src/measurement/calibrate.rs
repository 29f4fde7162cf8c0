//! Batch size calibration.
//!
//! A single invocation of a sub-microsecond operation cannot be timed
//! reliably: timer granularity dominates. Calibration keeps doubling a trial
//! batch until its wall-clock time clears a minimum reliable window, then
//! derives how many invocations should fill the real measurement window.

use crate::error::Error;

use super::clock::Clock;

/// Estimate how many invocations of `op` fit in one second.
///
/// Starts with a trial batch of 1 and measures its wall time `t`. Once `t`
/// exceeds `min_reliable_window`, returns `floor(batch / t)` (0 if `t <= 0`);
/// otherwise doubles the batch and retries. The doubling is unbounded: the
/// caller is responsible for operations cheap enough that this terminates.
///
/// # Errors
///
/// Propagates [`Error::ClockUnavailable`] from the underlying clock.
pub fn estimate_ops_per_second<F, T>(
    clock: &Clock,
    op: &mut F,
    min_reliable_window: f64,
) -> Result<u64, Error>
where
    F: FnMut() -> T,
{
    let mut batch_size: usize = 1;
    loop {
        let t = clock.measure(op, batch_size)?.wall;
        if t > min_reliable_window {
            if t <= 0.0 {
                return Ok(0);
            }
            return Ok((batch_size as f64 / t).floor() as u64);
        }
        batch_size *= 2;
    }
}

/// Batch size that should occupy `seconds_per_run` at the estimated rate.
///
/// The `+ 1` keeps the result strictly positive even when the estimated rate
/// is zero, so a pathologically slow operation still makes forward progress.
pub fn batch_size_for(ops_per_second: u64, seconds_per_run: f64) -> usize {
    (ops_per_second as f64 * seconds_per_run).floor() as usize + 1
}

/// Full calibration: estimate the invocation rate of `op`, then size a batch
/// for the configured measurement window.
///
/// The returned batch size is always >= 1 and is derived fresh for this
/// operation; it must not be reused for a different one.
///
/// # Errors
///
/// Propagates [`Error::ClockUnavailable`] from the underlying clock.
pub fn estimate_batch_size<F, T>(
    clock: &Clock,
    op: &mut F,
    min_reliable_window: f64,
    seconds_per_run: f64,
) -> Result<usize, Error>
where
    F: FnMut() -> T,
{
    let rate = estimate_ops_per_second(clock, op, min_reliable_window)?;
    Ok(batch_size_for(rate, seconds_per_run))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn zero_rate_floors_to_one() {
        assert_eq!(batch_size_for(0, 3.0), 1);
    }

    #[test]
    fn batch_size_scales_with_window() {
        assert_eq!(batch_size_for(100, 3.0), 301);
        assert_eq!(batch_size_for(100, 0.5), 51);
    }

    #[test]
    fn slow_operation_measured_in_one_batch() {
        // 60ms per invocation clears the 50ms window on the first trial, so
        // the rate comes from a single-invocation batch: floor(1 / ~0.06).
        let clock = Clock::new();
        let rate = estimate_ops_per_second(
            &clock,
            &mut || std::thread::sleep(Duration::from_millis(60)),
            0.05,
        )
        .unwrap();

        assert!(rate >= 1 && rate <= 16, "rate = {rate}");
    }

    #[test]
    fn cheap_operation_doubles_until_reliable() {
        // A near-free operation forces doubling; the estimated rate must be
        // high and the derived batch size positive.
        let clock = Clock::new();
        let mut x = 0u64;
        let rate =
            estimate_ops_per_second(&clock, &mut || x = black_box_add(x), 0.001).unwrap();

        assert!(rate > 1_000, "rate = {rate}");
        assert!(batch_size_for(rate, 0.01) >= 1);
    }

    fn black_box_add(x: u64) -> u64 {
        std::hint::black_box(x.wrapping_add(1))
    }
}
