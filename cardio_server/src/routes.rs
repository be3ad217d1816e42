//! Route handlers and the router itself.

use axum::{
    extract::{Json, State},
    http::{Method, StatusCode},
    routing::{get, post},
    Router,
};
use cardio_features::canonical_names;
use cardio_model::{BackendError, PredictionResult};
use log::error;
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::pipeline;
use crate::AppState;

#[derive(Debug, Serialize)]
struct InfoResponse {
    message: String,
    status: &'static str,
    model_loaded: bool,
    model_name: String,
    model_version: String,
    expected_features: Vec<&'static str>,
    usage: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    traceback: String,
}

/// Build the application router with permissive CORS, as the browser
/// frontend calls this API cross-origin.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/", get(home))
        .route("/predict", post(predict))
        .route("/debug", get(debug_probe))
        .route("/test-low-risk", get(test_low_risk))
        .layer(cors)
        .with_state(state)
}

async fn home(State(state): State<Arc<AppState>>) -> Json<InfoResponse> {
    let meta = state.model.metadata();
    Json(InfoResponse {
        message: "Cardiac risk prediction API is running".into(),
        status: "Active",
        model_loaded: true,
        model_name: meta.name.clone(),
        model_version: meta.version.to_string(),
        expected_features: canonical_names(),
        usage: "Send a POST request to /predict with patient data.",
    })
}

async fn predict(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Map<String, JsonValue>>,
) -> Result<Json<PredictionResult>, (StatusCode, Json<ErrorResponse>)> {
    pipeline::predict_from_body(state.model.as_ref(), &body)
        .map(Json)
        .map_err(internal_error)
}

async fn debug_probe(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PredictionResult>, (StatusCode, Json<ErrorResponse>)> {
    pipeline::predict_from_features(state.model.as_ref(), &pipeline::high_risk_fixture())
        .map(Json)
        .map_err(internal_error)
}

async fn test_low_risk(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PredictionResult>, (StatusCode, Json<ErrorResponse>)> {
    pipeline::predict_from_features(state.model.as_ref(), &pipeline::low_risk_fixture())
        .map(Json)
        .map_err(internal_error)
}

/// Inference failure is the only request-aborting path; everything
/// upstream degrades to defaults instead of erroring.
fn internal_error(err: BackendError) -> (StatusCode, Json<ErrorResponse>) {
    error!("prediction error: {err}");
    let traceback = error_chain(&err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: err.to_string(),
            traceback,
        }),
    )
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut chain = vec![err.to_string()];
    let mut source = err.source();
    while let Some(inner) = source {
        chain.push(inner.to_string());
        source = inner.source();
    }
    chain.join("\ncaused by: ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_chain_is_the_display_chain() {
        let err = BackendError::InferenceError("model exploded".into());
        assert_eq!(error_chain(&err), "Inference failed: model exploded");
    }
}
