//! # recon
//!
//! Anomaly scoring and explanation for multivariate time-series windows.
//!
//! Scores windows by the reconstruction error of an injected sequence
//! model, classifies above-threshold errors into severity tiers, and
//! attributes each window's error back to individual features.
//!
//! This facade provides a single entry point to the module:
//! - [`ReconstructionModel`] trait and domain models from SPI
//! - [`CalibrationConfig`] and [`ChannelConfig`] from API
//! - Calibration, scoring, severity, attribution, and [`ScoringPipeline`]
//!   from Core

// Re-export everything from SPI
pub use recon_spi::*;

// Re-export configuration from API
pub use recon_api::{CalibrationConfig, ChannelConfig};

// Re-export everything from Core
pub use recon_core::*;
