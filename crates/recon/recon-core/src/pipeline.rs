//! Scoring pipeline orchestration.

use std::sync::RwLock;

use tracing::{info, warn};

use recon_api::{CalibrationConfig, ChannelConfig};
use recon_spi::{
    FeatureContributions, ReconError, ReconstructionModel, Result, ScoreReport, Severity, Verdict,
    Window,
};

use crate::attribution::{feature_contributions, named_contributions};
use crate::calibration::{percentile_threshold, statistical_threshold};
use crate::scoring::reconstruction_errors;
use crate::severity::classify;

/// Anomaly scoring pipeline for one channel.
///
/// Owns the injected reconstruction model and the calibrated threshold,
/// which is the pipeline's only longer-lived state. Calibration swaps the
/// threshold behind a lock while `detect` and `score` read a fully-formed
/// snapshot, so concurrent scoring requests are safe against a concurrent
/// recalibration.
pub struct ScoringPipeline<M: ReconstructionModel> {
    model: M,
    config: ChannelConfig,
    calibration: CalibrationConfig,
    threshold: RwLock<Option<f64>>,
}

impl<M: ReconstructionModel> ScoringPipeline<M> {
    /// Create an uncalibrated pipeline with default calibration settings.
    pub fn new(model: M, config: ChannelConfig) -> Self {
        Self::with_calibration(model, config, CalibrationConfig::default())
    }

    /// Create an uncalibrated pipeline with explicit calibration settings.
    pub fn with_calibration(
        model: M,
        config: ChannelConfig,
        calibration: CalibrationConfig,
    ) -> Self {
        Self {
            model,
            config,
            calibration,
            threshold: RwLock::new(None),
        }
    }

    /// The channel configuration this pipeline scores against.
    pub fn config(&self) -> &ChannelConfig {
        &self.config
    }

    /// The active threshold, if calibrated.
    pub fn threshold(&self) -> Option<f64> {
        *self
            .threshold
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Calibrate with the statistical rule over a held-out error corpus.
    ///
    /// Stores and returns the new threshold, replacing any previous one.
    pub fn calibrate(&self, train_errors: &[f64]) -> Result<f64> {
        let threshold = statistical_threshold(train_errors, self.calibration.k)?;
        self.store_threshold(threshold, "statistical");
        Ok(threshold)
    }

    /// Calibrate with the percentile (peak-over-threshold) rule.
    pub fn calibrate_percentile(&self, errors: &[f64]) -> Result<f64> {
        let threshold = percentile_threshold(errors, self.calibration.q)?;
        self.store_threshold(threshold, "percentile");
        Ok(threshold)
    }

    fn store_threshold(&self, threshold: f64, rule: &str) {
        let mut guard = self
            .threshold
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(threshold);
        info!(
            channel = %self.config.channel,
            rule,
            threshold,
            "threshold calibrated"
        );
    }

    /// Detect anomalies in a batch of precomputed errors.
    ///
    /// One verdict per error, order-preserving: `is_anomaly` when the error
    /// strictly exceeds the active threshold, with the severity tier from
    /// the deviation ratio and `Safe` otherwise.
    pub fn detect(&self, errors: &[f64]) -> Result<Vec<Verdict>> {
        let threshold = self.threshold().ok_or(ReconError::NotCalibrated)?;

        errors
            .iter()
            .map(|&error| {
                if error > threshold {
                    Ok(Verdict::new(error, true, classify(error, threshold)?))
                } else {
                    Ok(Verdict::safe(error))
                }
            })
            .collect()
    }

    /// Score a batch of raw windows end to end.
    ///
    /// Validates shapes against the channel configuration, obtains
    /// reconstructions from the injected model, computes errors and
    /// verdicts, and attributes each window's error to its features.
    pub fn score(&self, windows: &[Window]) -> Result<Vec<ScoreReport>> {
        for window in windows {
            if window.shape() != self.config.shape() {
                return Err(ReconError::ShapeMismatch {
                    expected: self.config.shape(),
                    actual: window.shape(),
                });
            }
        }

        let reconstructions = self.model.reconstruct(windows)?;
        if reconstructions.len() != windows.len() {
            return Err(ReconError::ModelUnavailable(format!(
                "model returned {} reconstructions for {} windows",
                reconstructions.len(),
                windows.len()
            )));
        }
        for reconstruction in &reconstructions {
            if reconstruction.shape() != self.config.shape() {
                return Err(ReconError::ModelUnavailable(format!(
                    "model returned shape {:?}, expected {:?}",
                    reconstruction.shape(),
                    self.config.shape()
                )));
            }
        }

        let errors = reconstruction_errors(windows, &reconstructions)?;
        let verdicts = self.detect(&errors)?;

        let mut reports = Vec::with_capacity(windows.len());
        for ((window, reconstruction), verdict) in
            windows.iter().zip(&reconstructions).zip(verdicts)
        {
            let contributions = self.attribute(window, reconstruction)?;
            let report = ScoreReport {
                reconstruction_error: verdict.error,
                is_anomaly: verdict.is_anomaly,
                severity: verdict.severity,
                anomaly_score: verdict.error * 100.0,
                contributions,
            };
            if report.is_anomaly {
                warn!(
                    channel = %self.config.channel,
                    severity = %report.severity,
                    score = report.anomaly_score,
                    "anomaly detected"
                );
            }
            reports.push(report);
        }
        Ok(reports)
    }

    fn attribute(&self, window: &Window, reconstruction: &Window) -> Result<FeatureContributions> {
        match &self.config.feature_names {
            Some(names) => Ok(named_contributions(window, reconstruction, names)?.into()),
            None => Ok(feature_contributions(window, reconstruction)?.into()),
        }
    }
}
