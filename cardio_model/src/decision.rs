//! Output calibration: clamp, threshold, and percent rounding.

use serde::{Deserialize, Serialize};

/// The client-facing prediction.
///
/// `features_used` and `features_values` echo the exact vector sent to
/// inference so clients can audit what the model actually saw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: u8,
    pub probability: f64,
    pub features_used: Vec<String>,
    pub features_values: Vec<f64>,
}

/// Calibrate a raw model output into a bounded, classified result.
///
/// The raw value is clamped to [0, 1] first; the model is not trusted
/// to stay inside the unit interval. The class threshold is strict:
/// exactly 0.5 classifies as 0.
pub fn build_decision(
    raw_probability: f64,
    features_used: Vec<String>,
    features_values: Vec<f64>,
) -> PredictionResult {
    let p = raw_probability.clamp(0.0, 1.0);
    PredictionResult {
        prediction: u8::from(p > 0.5),
        probability: (p * 10_000.0).round() / 100.0,
        features_used,
        features_values,
    }
}
