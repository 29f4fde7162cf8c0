//! Wall and CPU clock access for batch measurement.

use std::hint::black_box as std_black_box;
use std::time::Instant;

use cpu_time::ProcessTime;

use crate::error::Error;

/// Wrapper around `std::hint::black_box` for preventing compiler optimizations.
///
/// Every invocation result is passed through this so the compiler cannot
/// elide the measured work or reorder it relative to clock reads.
#[inline]
pub fn black_box<T>(x: T) -> T {
    std_black_box(x)
}

/// Elapsed wall and CPU time for one batch, in seconds.
///
/// Created once per batch execution and consumed immediately to derive a
/// per-invocation cost; raw timings are not retained.
#[derive(Debug, Clone, Copy)]
pub struct BatchTiming {
    /// Monotonic wall-clock seconds for the whole batch.
    pub wall: f64,
    /// Process CPU seconds for the whole batch.
    pub cpu: f64,
}

/// Clock source measuring batches of invocations.
///
/// Wall time comes from [`Instant`]; CPU time from the process CPU clock.
/// The clock reads bracket the whole batch, so their overhead is amortized
/// over every invocation in it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Clock;

impl Clock {
    /// Create a clock source.
    pub fn new() -> Self {
        Self
    }

    /// Run `batch_size` back-to-back invocations of `op` and return the
    /// elapsed wall and CPU time for the whole batch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClockUnavailable`] if the process CPU clock cannot
    /// be read. This is fatal for the measurement in progress; there is no
    /// fallback timing strategy.
    pub fn measure<F, T>(&self, op: &mut F, batch_size: usize) -> Result<BatchTiming, Error>
    where
        F: FnMut() -> T,
    {
        let cpu_start =
            ProcessTime::try_now().map_err(|source| Error::ClockUnavailable { source })?;
        let wall_start = Instant::now();

        for _ in 0..batch_size {
            black_box(op());
        }

        let wall = wall_start.elapsed().as_secs_f64();
        let cpu = cpu_start
            .try_elapsed()
            .map_err(|source| Error::ClockUnavailable { source })?
            .as_secs_f64();

        Ok(BatchTiming { wall, cpu })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn measures_all_invocations() {
        let clock = Clock::new();
        let mut calls = 0u64;
        let timing = clock.measure(&mut || calls += 1, 1000).unwrap();

        assert_eq!(calls, 1000);
        assert!(timing.wall >= 0.0);
        assert!(timing.cpu >= 0.0);
    }

    #[test]
    fn wall_time_includes_sleep() {
        let clock = Clock::new();
        let timing = clock
            .measure(&mut || std::thread::sleep(Duration::from_millis(10)), 1)
            .unwrap();

        assert!(timing.wall >= 0.010);
        // Sleeping consumes almost no CPU time.
        assert!(timing.cpu < timing.wall);
    }

    #[test]
    fn zero_batch_is_empty_measurement() {
        let clock = Clock::new();
        let mut calls = 0u64;
        let timing = clock.measure(&mut || calls += 1, 0).unwrap();

        assert_eq!(calls, 0);
        assert!(timing.wall >= 0.0);
    }
}
