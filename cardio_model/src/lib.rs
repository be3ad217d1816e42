//! Model serving for the cardiac risk predictor.
//!
//! Provides the pluggable inference backend trait, a dense-network
//! backend loaded from a JSON artifact, and output calibration
//! (clamping, thresholding, percent rounding).

pub mod backend;
pub mod decision;
pub mod dense;
pub mod metadata;

pub use backend::{BackendError, ModelBackend, Tensor};
pub use decision::{build_decision, PredictionResult};
pub use dense::{Activation, DenseArtifact, DenseBackend, DenseLayer};
pub use metadata::{ModelMetadata, ModelVersion};
