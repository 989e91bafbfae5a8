//! Per-feature error attribution for explainability.

use std::collections::BTreeMap;

use recon_spi::{ReconError, Reconstruction, Result, Window};

/// Per-feature mean squared error across the time axis.
fn per_feature_mse(original: &Window, reconstructed: &Reconstruction) -> Result<Vec<f64>> {
    if original.shape() != reconstructed.shape() {
        return Err(ReconError::ShapeMismatch {
            expected: original.shape(),
            actual: reconstructed.shape(),
        });
    }

    let (steps, features) = original.shape();
    let mut mse = vec![0.0; features];
    for t in 0..steps {
        for f in 0..features {
            let diff = original.get(t, f) - reconstructed.get(t, f);
            mse[f] += diff * diff;
        }
    }
    for value in &mut mse {
        *value /= steps as f64;
    }
    Ok(mse)
}

/// Relative contribution of each feature to the window's total error.
///
/// Per-feature MSE across the time axis, normalized by the sum over all
/// features and scaled to percent. Index-aligned to input feature order.
/// When the total error is exactly zero all contributions are zero rather
/// than an error (nothing to attribute).
pub fn feature_contributions(
    original: &Window,
    reconstructed: &Reconstruction,
) -> Result<Vec<f64>> {
    let mut mse = per_feature_mse(original, reconstructed)?;

    let total: f64 = mse.iter().sum();
    if total == 0.0 {
        return Ok(mse);
    }

    for value in &mut mse {
        *value = *value / total * 100.0;
    }
    Ok(mse)
}

/// Name-keyed variant of [`feature_contributions`].
///
/// Requires one name per feature.
pub fn named_contributions(
    original: &Window,
    reconstructed: &Reconstruction,
    names: &[String],
) -> Result<BTreeMap<String, f64>> {
    if names.len() != original.features() {
        return Err(ReconError::InvalidInput(format!(
            "expected {} feature names, got {}",
            original.features(),
            names.len()
        )));
    }

    let contributions = feature_contributions(original, reconstructed)?;
    Ok(names
        .iter()
        .cloned()
        .zip(contributions)
        .collect())
}

/// Elementwise squared-error matrix of shape `(steps, features)`.
///
/// No normalization; intended for visualization, not decisioning.
pub fn error_heatmap(original: &Window, reconstructed: &Reconstruction) -> Result<Vec<Vec<f64>>> {
    if original.shape() != reconstructed.shape() {
        return Err(ReconError::ShapeMismatch {
            expected: original.shape(),
            actual: reconstructed.shape(),
        });
    }

    let (steps, _) = original.shape();
    Ok((0..steps)
        .map(|t| {
            original
                .row(t)
                .iter()
                .zip(reconstructed.row(t))
                .map(|(a, b)| (a - b).powi(2))
                .collect()
        })
        .collect())
}
