//! Reconstruction model contract
//!
//! Defines the capability the scoring core expects from the external
//! sequence model.

use crate::error::Result;
use crate::model::{Reconstruction, Window};

/// External sequence model exposed to the scoring core.
///
/// The model is trained and hosted elsewhere; the core only requires a
/// shape-preserving batch mapping from windows to reconstructions. Callers
/// treat any failure of this function as an upstream
/// [`ReconError::ModelUnavailable`](crate::ReconError::ModelUnavailable)
/// and propagate it unmodified.
///
/// # Example
///
/// ```rust,ignore
/// use recon_spi::{ReconstructionModel, Window};
///
/// fn reconstruct_one<M: ReconstructionModel>(model: &M, window: &Window) -> recon_spi::Result<Window> {
///     let mut batch = model.reconstruct(std::slice::from_ref(window))?;
///     Ok(batch.remove(0))
/// }
/// ```
pub trait ReconstructionModel: Send + Sync {
    /// Reconstruct a batch of windows.
    ///
    /// # Arguments
    ///
    /// * `windows` - Input windows, each of the model's configured shape
    ///
    /// # Returns
    ///
    /// One reconstruction per input window, in input order, each with the
    /// same `(steps, features)` shape as its input.
    fn reconstruct(&self, windows: &[Window]) -> Result<Vec<Reconstruction>>;
}
