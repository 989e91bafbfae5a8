//! Reconstruction Scoring Service Provider Interface
//!
//! Defines the contracts, domain models, and error types for
//! reconstruction-error anomaly scoring:
//!
//! - [`ReconstructionModel`]: the injected external sequence model
//! - [`Window`]: a fixed-shape slice of a multivariate time series
//! - [`Severity`], [`Verdict`], [`ScoreReport`]: scoring outputs
//! - [`ReconError`]: standardized error type for all scoring operations
//! - [`Result`]: convenient result type alias

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::ReconstructionModel;
pub use error::{ReconError, Result};
pub use model::{
    FeatureContributions, Reconstruction, ScoreReport, Severity, Verdict, Window,
};
