//! Scoring error types.
//!
//! Defines the standardized error type for all scoring operations.

use thiserror::Error;

/// Result type alias for scoring operations.
pub type Result<T> = std::result::Result<T, ReconError>;

/// Errors that can occur during anomaly scoring and explanation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReconError {
    /// Empty or malformed input (calibration corpus, percentile, feature names).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Mismatched window/reconstruction dimensions.
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// Input and reconstruction batches have different lengths.
    #[error("Batch size mismatch: {inputs} input windows, {reconstructions} reconstructions")]
    BatchSizeMismatch {
        inputs: usize,
        reconstructions: usize,
    },

    /// Non-positive threshold at classification time.
    #[error("Invalid threshold: must be positive, got {value}")]
    InvalidThreshold { value: f64 },

    /// Detection attempted before any threshold exists.
    #[error("Pipeline not calibrated: call calibrate() before detect()")]
    NotCalibrated,

    /// Upstream reconstruction model failed or returned the wrong shape.
    #[error("Reconstruction model unavailable: {0}")]
    ModelUnavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let error = ReconError::InvalidInput("empty error corpus".to_string());
        assert_eq!(error.to_string(), "Invalid input: empty error corpus");
    }

    #[test]
    fn test_shape_mismatch_display() {
        let error = ReconError::ShapeMismatch {
            expected: (50, 25),
            actual: (50, 24),
        };
        assert_eq!(
            error.to_string(),
            "Shape mismatch: expected (50, 25), got (50, 24)"
        );
    }

    #[test]
    fn test_batch_size_mismatch_display() {
        let error = ReconError::BatchSizeMismatch {
            inputs: 4,
            reconstructions: 3,
        };
        assert_eq!(
            error.to_string(),
            "Batch size mismatch: 4 input windows, 3 reconstructions"
        );
    }

    #[test]
    fn test_invalid_threshold_display() {
        let error = ReconError::InvalidThreshold { value: 0.0 };
        assert_eq!(error.to_string(), "Invalid threshold: must be positive, got 0");
    }

    #[test]
    fn test_not_calibrated_display() {
        let error = ReconError::NotCalibrated;
        assert_eq!(
            error.to_string(),
            "Pipeline not calibrated: call calibrate() before detect()"
        );
    }

    #[test]
    fn test_model_unavailable_display() {
        let error = ReconError::ModelUnavailable("inference backend down".to_string());
        assert_eq!(
            error.to_string(),
            "Reconstruction model unavailable: inference backend down"
        );
    }

    #[test]
    fn test_error_is_clone_and_eq() {
        let error = ReconError::ShapeMismatch {
            expected: (10, 2),
            actual: (10, 3),
        };
        let cloned = error.clone();
        assert_eq!(error, cloned);
        assert_ne!(error, ReconError::NotCalibrated);
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(ReconError::NotCalibrated);
        assert!(!error.to_string().is_empty());
    }

    #[test]
    fn test_all_error_variants_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReconError>();
    }

    #[test]
    fn test_result_error_propagation() {
        fn inner() -> Result<f64> {
            Err(ReconError::NotCalibrated)
        }

        fn outer() -> Result<f64> {
            inner()?;
            Ok(1.0)
        }

        assert_eq!(outer().unwrap_err(), ReconError::NotCalibrated);
    }
}
