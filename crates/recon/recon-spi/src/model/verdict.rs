//! Per-window detection verdict.

use serde::{Deserialize, Serialize};

use super::severity::Severity;

/// The detection outcome for a single window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Mean squared reconstruction error for the window.
    pub error: f64,
    /// Whether the error exceeded the calibrated threshold.
    pub is_anomaly: bool,
    /// Severity tier; `Safe` whenever `is_anomaly` is false.
    pub severity: Severity,
}

impl Verdict {
    pub fn new(error: f64, is_anomaly: bool, severity: Severity) -> Self {
        Self {
            error,
            is_anomaly,
            severity,
        }
    }

    /// A below-threshold verdict.
    pub fn safe(error: f64) -> Self {
        Self::new(error, false, Severity::Safe)
    }
}
