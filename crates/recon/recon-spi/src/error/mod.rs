pub mod recon_error;

pub use recon_error::{ReconError, Result};
