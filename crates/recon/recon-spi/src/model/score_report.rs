//! Serving-layer scoring record.

use serde::{Deserialize, Serialize};

use super::contributions::FeatureContributions;
use super::severity::Severity;

/// Per-window record handed to the serving layer.
///
/// Field names match the JSON response contract: snake_case keys with the
/// severity as an upper-case string and `anomaly_score = error * 100`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub reconstruction_error: f64,
    pub is_anomaly: bool,
    pub severity: Severity,
    pub anomaly_score: f64,
    pub contributions: FeatureContributions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let report = ScoreReport {
            reconstruction_error: 0.012,
            is_anomaly: true,
            severity: Severity::Warning,
            anomaly_score: 1.2,
            contributions: FeatureContributions::Indexed(vec![100.0]),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["reconstruction_error"], 0.012);
        assert_eq!(json["is_anomaly"], true);
        assert_eq!(json["severity"], "WARNING");
        assert_eq!(json["anomaly_score"], 1.2);
        assert!(json["contributions"].is_array());
    }
}
