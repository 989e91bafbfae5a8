//! Window value type for multivariate time series slices.

use serde::{Deserialize, Serialize};

use crate::error::{ReconError, Result};

/// A fixed-shape slice of a multivariate time series.
///
/// Stores `steps * features` values in row-major order: one row per
/// timestep, one column per feature. Immutable once constructed; all
/// scoring operations treat windows as value objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    values: Vec<f64>,
    steps: usize,
    features: usize,
}

/// A model output with the same shape contract as its input [`Window`].
pub type Reconstruction = Window;

impl Window {
    /// Create a window from a flat row-major buffer.
    ///
    /// # Arguments
    ///
    /// * `steps` - Number of timesteps (rows)
    /// * `features` - Number of features (columns)
    /// * `values` - Row-major values, length must equal `steps * features`
    pub fn new(steps: usize, features: usize, values: Vec<f64>) -> Result<Self> {
        if values.len() != steps * features {
            return Err(ReconError::InvalidInput(format!(
                "expected {} values for a {}x{} window, got {}",
                steps * features,
                steps,
                features,
                values.len()
            )));
        }
        Ok(Self {
            values,
            steps,
            features,
        })
    }

    /// Create a window from nested per-timestep rows.
    ///
    /// Fails if the rows are ragged or empty.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let steps = rows.len();
        if steps == 0 {
            return Err(ReconError::InvalidInput(
                "window must have at least one timestep".to_string(),
            ));
        }
        let features = rows[0].len();
        let mut values = Vec::with_capacity(steps * features);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != features {
                return Err(ReconError::InvalidInput(format!(
                    "ragged window: row 0 has {} features, row {} has {}",
                    features,
                    i,
                    row.len()
                )));
            }
            values.extend_from_slice(row);
        }
        Ok(Self {
            values,
            steps,
            features,
        })
    }

    /// Number of timesteps.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of features per timestep.
    pub fn features(&self) -> usize {
        self.features
    }

    /// Shape as `(steps, features)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.steps, self.features)
    }

    /// Value at timestep `t`, feature `f`.
    pub fn get(&self, t: usize, f: usize) -> f64 {
        self.values[t * self.features + f]
    }

    /// The feature vector at timestep `t`.
    pub fn row(&self, t: usize) -> &[f64] {
        let start = t * self.features;
        &self.values[start..start + self.features]
    }

    /// Flat row-major view of all values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_shape() {
        let window = Window::new(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(window.shape(), (2, 3));
        assert_eq!(window.get(0, 0), 1.0);
        assert_eq!(window.get(1, 2), 6.0);
    }

    #[test]
    fn test_new_wrong_length() {
        let result = Window::new(2, 3, vec![1.0, 2.0]);
        assert!(matches!(result, Err(ReconError::InvalidInput(_))));
    }

    #[test]
    fn test_from_rows() {
        let window = Window::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(window.shape(), (2, 2));
        assert_eq!(window.row(1), &[3.0, 4.0]);
    }

    #[test]
    fn test_from_rows_ragged() {
        let result = Window::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(result, Err(ReconError::InvalidInput(_))));
    }

    #[test]
    fn test_from_rows_empty() {
        let result = Window::from_rows(Vec::new());
        assert!(matches!(result, Err(ReconError::InvalidInput(_))));
    }

    #[test]
    fn test_values_row_major() {
        let window = Window::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(window.values(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_serde_round_trip_preserves_shape() {
        let window = Window::from_rows(vec![vec![0.1, 0.2], vec![0.3, 0.4]]).unwrap();
        let json = serde_json::to_string(&window).unwrap();
        let back: Window = serde_json::from_str(&json).unwrap();
        assert_eq!(window, back);
    }
}
