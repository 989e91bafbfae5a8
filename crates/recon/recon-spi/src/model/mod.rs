pub mod contributions;
pub mod score_report;
pub mod severity;
pub mod verdict;
pub mod window;

pub use contributions::FeatureContributions;
pub use score_report::ScoreReport;
pub use severity::Severity;
pub use verdict::Verdict;
pub use window::{Reconstruction, Window};
