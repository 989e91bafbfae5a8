//! Per-feature error attribution.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Relative contribution of each feature to a window's total error.
///
/// Percentages in `[0, 100]` that sum to 100 across all features, or all
/// zero when the total error is zero. Keyed by feature name when names are
/// known, positional otherwise; serializes as a JSON object or array
/// accordingly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureContributions {
    /// Name-keyed contributions, deterministic iteration order.
    Named(BTreeMap<String, f64>),
    /// Positional contributions, index-aligned to input feature order.
    Indexed(Vec<f64>),
}

impl FeatureContributions {
    /// Number of features covered.
    pub fn len(&self) -> usize {
        match self {
            FeatureContributions::Named(map) => map.len(),
            FeatureContributions::Indexed(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of all contribution percentages.
    pub fn total(&self) -> f64 {
        match self {
            FeatureContributions::Named(map) => map.values().sum(),
            FeatureContributions::Indexed(values) => values.iter().sum(),
        }
    }
}

impl From<Vec<f64>> for FeatureContributions {
    fn from(values: Vec<f64>) -> Self {
        FeatureContributions::Indexed(values)
    }
}

impl From<BTreeMap<String, f64>> for FeatureContributions {
    fn from(map: BTreeMap<String, f64>) -> Self {
        FeatureContributions::Named(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_serializes_as_array() {
        let contributions = FeatureContributions::Indexed(vec![75.0, 25.0]);
        assert_eq!(serde_json::to_string(&contributions).unwrap(), "[75.0,25.0]");
    }

    #[test]
    fn test_named_serializes_as_object() {
        let mut map = BTreeMap::new();
        map.insert("pressure".to_string(), 60.0);
        map.insert("temperature".to_string(), 40.0);
        let contributions = FeatureContributions::Named(map);
        assert_eq!(
            serde_json::to_string(&contributions).unwrap(),
            "{\"pressure\":60.0,\"temperature\":40.0}"
        );
    }

    #[test]
    fn test_total_and_len() {
        let contributions = FeatureContributions::Indexed(vec![50.0, 30.0, 20.0]);
        assert_eq!(contributions.len(), 3);
        assert!((contributions.total() - 100.0).abs() < 1e-9);
        assert!(!contributions.is_empty());
    }
}
