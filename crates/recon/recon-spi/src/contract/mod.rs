pub mod reconstruction_model;

pub use reconstruction_model::ReconstructionModel;
