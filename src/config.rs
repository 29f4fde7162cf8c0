//! Configuration for benchmark runs.

use crate::error::Error;

/// Configuration options for a [`Harness`](crate::Harness).
///
/// All knobs are explicit parameters with process-wide defaults; there are
/// no hidden globals.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of retained trials per benchmark (default: 5).
    ///
    /// One extra trial is always run and discarded to absorb cold-start
    /// effects, so the harness executes `num_samples + 1` trials in total.
    pub num_samples: usize,

    /// Target measurement window per trial in seconds (default: 3.0).
    ///
    /// Calibration sizes each batch so that one trial occupies roughly this
    /// much time.
    pub seconds_per_run: f64,

    /// Minimum wall-clock window considered reliable during calibration,
    /// in seconds (default: 0.05).
    ///
    /// Trial batches are doubled until they occupy at least this long, so
    /// timer granularity cannot dominate the rate estimate.
    pub min_reliable_window: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_samples: 5,
            seconds_per_run: 3.0,
            min_reliable_window: 0.05,
        }
    }
}

impl Config {
    /// Check the configuration before any measurement runs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSampleCount`] if `num_samples` is zero. An
    /// empty sample set must never reach the statistics layer, so this is
    /// rejected up front rather than discovered mid-computation.
    pub fn validate(&self) -> Result<(), Error> {
        if self.num_samples == 0 {
            return Err(Error::InvalidSampleCount {
                count: self.num_samples,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.num_samples, 5);
        assert_eq!(config.seconds_per_run, 3.0);
        assert_eq!(config.min_reliable_window, 0.05);
    }

    #[test]
    fn default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn zero_samples_rejected() {
        let config = Config {
            num_samples: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidSampleCount { count: 0 })
        ));
    }
}
