//! Per-request inference pipeline: raw body -> mapped features ->
//! ordered vector -> model -> calibrated decision.

use cardio_features::{assemble, canonical_names, map_request, CoercedFeatures, CATALOG};
use cardio_model::{build_decision, BackendError, ModelBackend, PredictionResult, Tensor};
use log::info;
use serde_json::{Map, Value as JsonValue};
use std::collections::HashMap;

/// Run the full pipeline for a client request body.
pub fn predict_from_body(
    model: &dyn ModelBackend,
    body: &Map<String, JsonValue>,
) -> Result<PredictionResult, BackendError> {
    info!("received prediction request with {} fields", body.len());
    let coerced = map_request(body);
    predict_from_features(model, &coerced)
}

/// Run the pipeline from already-coerced features. The debug endpoints
/// enter here with fixed vectors.
pub fn predict_from_features(
    model: &dyn ModelBackend,
    coerced: &CoercedFeatures,
) -> Result<PredictionResult, BackendError> {
    let assembled = assemble(coerced);

    // One single-element named tensor per catalog position, mirroring
    // the trained network's 13 independent inputs.
    let mut inputs = HashMap::with_capacity(CATALOG.len());
    for spec in &CATALOG {
        inputs.insert(
            spec.canonical_name.to_string(),
            Tensor::scalar(spec.canonical_name.into(), assembled.values[spec.position] as f32),
        );
    }

    let outputs = model.infer(inputs)?;
    let raw = outputs
        .get("output")
        .ok_or_else(|| BackendError::InferenceError("model returned no 'output' tensor".into()))?
        .scalar_value()?;

    let result = build_decision(
        f64::from(raw),
        canonical_names().iter().map(|s| s.to_string()).collect(),
        assembled.values.to_vec(),
    );
    info!(
        "prediction: class={}, probability={}%",
        result.prediction, result.probability
    );
    Ok(result)
}

/// Fixed high-risk profile used by `GET /debug`.
pub fn high_risk_fixture() -> CoercedFeatures {
    fixture(&[
        65.0, 1.0, 4.0, 180.0, 300.0, 1.0, 2.0, 120.0, 1.0, 4.5, 3.0, 3.0, 7.0,
    ])
}

/// Fixed low-risk profile used by `GET /test-low-risk`.
pub fn low_risk_fixture() -> CoercedFeatures {
    fixture(&[
        40.0, 0.0, 1.0, 120.0, 180.0, 0.0, 0.0, 160.0, 0.0, 0.5, 1.0, 0.0, 3.0,
    ])
}

fn fixture(values: &[f64]) -> CoercedFeatures {
    CATALOG
        .iter()
        .zip(values)
        .map(|(spec, &v)| (spec.canonical_name, v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_cover_every_feature() {
        assert_eq!(high_risk_fixture().len(), CATALOG.len());
        assert_eq!(low_risk_fixture().len(), CATALOG.len());
        assert_eq!(high_risk_fixture().get("thallium"), Some(&7.0));
        assert_eq!(low_risk_fixture().get("max_hr"), Some(&160.0));
    }
}
