//! Threshold calibration over historical error corpora.

use recon_spi::{ReconError, Result};

/// Statistical threshold: `mean(train_errors) + k * std(train_errors)`.
///
/// Uses the population standard deviation (divide by `n`). Zero-variance
/// and single-element corpora are valid and yield a threshold equal to the
/// mean; only an empty corpus is rejected.
pub fn statistical_threshold(train_errors: &[f64], k: f64) -> Result<f64> {
    if train_errors.is_empty() {
        return Err(ReconError::InvalidInput(
            "calibration corpus is empty".to_string(),
        ));
    }

    let n = train_errors.len() as f64;
    let mean = train_errors.iter().sum::<f64>() / n;
    let variance = train_errors.iter().map(|e| (e - mean).powi(2)).sum::<f64>() / n;

    Ok(mean + k * variance.sqrt())
}

/// Percentile threshold: the q-th percentile of the error corpus.
///
/// Simplified peak-over-threshold rule. `q` is a fraction in `[0, 1]`;
/// the value is linearly interpolated between the closest ranks of the
/// ascending-sorted corpus, so `q = 0.0` returns the minimum and `q = 1.0`
/// the maximum.
pub fn percentile_threshold(errors: &[f64], q: f64) -> Result<f64> {
    if errors.is_empty() {
        return Err(ReconError::InvalidInput("error corpus is empty".to_string()));
    }
    if !(0.0..=1.0).contains(&q) {
        return Err(ReconError::InvalidInput(format!(
            "percentile must be in [0, 1], got {q}"
        )));
    }

    let mut sorted = errors.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let rank = q * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return Ok(sorted[lower]);
    }

    let weight = rank - lower as f64;
    Ok(sorted[lower] * (1.0 - weight) + sorted[upper] * weight)
}
