//! Reconstruction Scoring API
//!
//! Configuration types for the anomaly scoring pipeline.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use recon_spi::{
    FeatureContributions, ReconError, Reconstruction, ReconstructionModel, Result, ScoreReport,
    Severity, Verdict, Window,
};

// ============================================================================
// Calibration Configuration
// ============================================================================

/// Threshold calibration configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalibrationConfig {
    /// Multiplier on the standard deviation for the statistical rule (default: 3.0).
    pub k: f64,
    /// Percentile in `[0, 1]` for the peak-over-threshold rule (default: 0.98).
    pub q: f64,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self { k: 3.0, q: 0.98 }
    }
}

impl CalibrationConfig {
    pub fn new(k: f64, q: f64) -> Self {
        Self { k, q }
    }
}

// ============================================================================
// Channel Configuration
// ============================================================================

/// Per-channel scoring configuration.
///
/// Fixed at startup by the embedding application; the core never derives
/// these values dynamically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Channel identifier the model was trained for.
    pub channel: String,
    /// Timesteps per window (default: 50).
    pub window_size: usize,
    /// Features per timestep.
    pub num_features: usize,
    /// Optional feature names; when present, contributions are name-keyed.
    pub feature_names: Option<Vec<String>>,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            channel: "P-1".to_string(),
            window_size: 50,
            num_features: 1,
            feature_names: None,
        }
    }
}

impl ChannelConfig {
    pub fn new(channel: impl Into<String>, window_size: usize, num_features: usize) -> Self {
        Self {
            channel: channel.into(),
            window_size,
            num_features,
            feature_names: None,
        }
    }

    /// Attach feature names for name-keyed attributions.
    pub fn with_feature_names(mut self, names: Vec<String>) -> Self {
        self.feature_names = Some(names);
        self
    }

    /// Expected window shape as `(steps, features)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.window_size, self.num_features)
    }
}
