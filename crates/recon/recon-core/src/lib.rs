//! # recon-core
//!
//! Numeric core of the reconstruction scoring module: threshold
//! calibration, reconstruction-error computation, severity classification,
//! per-feature attribution, and the orchestrating pipeline.

mod attribution;
mod calibration;
mod pipeline;
mod scoring;
mod severity;

pub use attribution::{error_heatmap, feature_contributions, named_contributions};
pub use calibration::{percentile_threshold, statistical_threshold};
pub use pipeline::ScoringPipeline;
pub use scoring::{reconstruction_errors, window_error};
pub use severity::classify;
