//! Severity classification of above-threshold errors.

use recon_spi::{ReconError, Result, Severity};

/// Classify an anomalous error by its deviation ratio.
///
/// Intended for errors the caller has already determined to exceed the
/// threshold; below-threshold windows are assigned [`Severity::Safe`] by
/// the caller without consulting this function. Boundaries are strict:
/// a ratio of exactly 2.0 or 5.0 falls to the lower tier.
pub fn classify(error: f64, threshold: f64) -> Result<Severity> {
    if threshold <= 0.0 {
        return Err(ReconError::InvalidThreshold { value: threshold });
    }

    let ratio = error / threshold;
    if ratio > 5.0 {
        Ok(Severity::Critical)
    } else if ratio > 2.0 {
        Ok(Severity::Warning)
    } else {
        Ok(Severity::Info)
    }
}
