//! Summary statistics over per-invocation cost samples.
//!
//! Variance is the population variance (divisor = sample count, not n − 1):
//! the harness reports noise as a percentage of the mean, not confidence
//! intervals, so the simpler estimator is the right one.

/// Arithmetic mean of `samples`. Returns `NaN` for an empty slice.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return f64::NAN;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Population variance of `samples`. Returns `NaN` for an empty slice.
pub fn variance(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return f64::NAN;
    }
    let m = mean(samples);
    samples
        .iter()
        .map(|x| {
            let d = x - m;
            d * d
        })
        .sum::<f64>()
        / samples.len() as f64
}

/// Population standard deviation of `samples`.
pub fn stddev(samples: &[f64]) -> f64 {
    variance(samples).sqrt()
}
