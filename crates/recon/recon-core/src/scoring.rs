//! Reconstruction-error computation.

use recon_spi::{ReconError, Reconstruction, Result, Window};

/// Mean squared error between a window and its reconstruction.
///
/// Averaged over all `steps * features` elements. Zero iff the window and
/// the reconstruction are exactly equal.
pub fn window_error(original: &Window, reconstructed: &Reconstruction) -> Result<f64> {
    if original.shape() != reconstructed.shape() {
        return Err(ReconError::ShapeMismatch {
            expected: original.shape(),
            actual: reconstructed.shape(),
        });
    }

    let n = original.values().len() as f64;
    let sum_sq = original
        .values()
        .iter()
        .zip(reconstructed.values())
        .map(|(a, b)| (a - b).powi(2))
        .sum::<f64>();

    Ok(sum_sq / n)
}

/// One scalar reconstruction error per window, in input order.
pub fn reconstruction_errors(
    inputs: &[Window],
    reconstructions: &[Reconstruction],
) -> Result<Vec<f64>> {
    if inputs.len() != reconstructions.len() {
        return Err(ReconError::BatchSizeMismatch {
            inputs: inputs.len(),
            reconstructions: reconstructions.len(),
        });
    }

    inputs
        .iter()
        .zip(reconstructions)
        .map(|(original, reconstructed)| window_error(original, reconstructed))
        .collect()
}
