//! HTTP surface of the cardiac risk predictor.
//!
//! The binary in `main.rs` loads the model artifact (fatal on failure)
//! and serves the router built here; the per-request pipeline itself
//! lives in `pipeline`.

pub mod pipeline;
pub mod routes;

use cardio_model::ModelBackend;
use std::sync::Arc;

/// Shared, read-only per-process state.
///
/// The backend's `infer` takes `&self` and mutates nothing, so the
/// whole state is shared across workers without locking.
pub struct AppState {
    pub model: Arc<dyn ModelBackend>,
}

impl AppState {
    pub fn new(model: Arc<dyn ModelBackend>) -> Self {
        Self { model }
    }
}
