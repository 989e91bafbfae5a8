//! Basic example demonstrating reconstruction-error anomaly scoring
//!
//! Run with: cargo run --example basic -p recon

use recon::{
    ChannelConfig, Reconstruction, ReconstructionModel, Result, ScoringPipeline, Window,
};

/// Stand-in for the external sequence model: reconstructs each window as
/// its per-feature mean, so flat telemetry reconstructs perfectly and
/// transients leave a large residual.
struct MeanModel;

impl ReconstructionModel for MeanModel {
    fn reconstruct(&self, windows: &[Window]) -> Result<Vec<Reconstruction>> {
        windows
            .iter()
            .map(|w| {
                let (steps, features) = w.shape();
                let mut means = vec![0.0; features];
                for t in 0..steps {
                    for f in 0..features {
                        means[f] += w.get(t, f);
                    }
                }
                for m in &mut means {
                    *m /= steps as f64;
                }
                Window::from_rows(vec![means; steps])
            })
            .collect()
    }
}

fn main() -> Result<()> {
    println!("=== recon Basic Example ===\n");

    let config = ChannelConfig::new("P-1", 10, 2)
        .with_feature_names(vec!["bus_voltage".to_string(), "wheel_rpm".to_string()]);
    let pipeline = ScoringPipeline::new(MeanModel, config);

    // Calibrate against a held-out corpus of historical errors
    let train_errors = vec![0.010, 0.012, 0.011, 0.009, 0.013, 0.010];
    let threshold = pipeline.calibrate(&train_errors)?;
    println!("Calibrated threshold: {threshold:.6}\n");

    // A quiet window and one with a transient on the first feature
    let quiet = Window::new(10, 2, vec![1.0; 20])?;
    let mut values = vec![1.0; 20];
    values[10] = 8.0;
    let transient = Window::new(10, 2, values)?;

    for report in pipeline.score(&[quiet, transient])? {
        println!(
            "error={:.4} anomaly={} severity={} score={:.2}",
            report.reconstruction_error, report.is_anomaly, report.severity, report.anomaly_score
        );
        println!("contributions: {:?}\n", report.contributions);
    }

    println!("=== Example Complete ===");
    Ok(())
}
