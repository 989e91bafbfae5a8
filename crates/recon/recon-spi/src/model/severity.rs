//! Severity tiers for scored windows.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse-grained anomaly magnitude bucket.
///
/// Serialized as upper-case strings (`"SAFE"`, `"INFO"`, `"WARNING"`,
/// `"CRITICAL"`) to match the wire format consumed by serving layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Error at or below the calibrated threshold.
    Safe,
    /// Above threshold, ratio at most 2.
    Info,
    /// Ratio above 2, at most 5.
    Warning,
    /// Ratio above 5.
    Critical,
}

impl Severity {
    /// Upper-case string form, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Safe => "SAFE",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
