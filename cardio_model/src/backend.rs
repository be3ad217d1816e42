//! Pluggable backend trait and error types for model inference

use crate::metadata::ModelMetadata;
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during backend operations
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Model loading failed: {0}")]
    LoadError(String),
    #[error("Inference failed: {0}")]
    InferenceError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Tensor data wrapper for inputs/outputs
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    pub name: String,
    pub shape: Vec<usize>,
    pub data: Vec<f32>,
}

impl Tensor {
    pub fn new(name: String, shape: Vec<usize>, data: Vec<f32>) -> Result<Self, BackendError> {
        let expected_size: usize = shape.iter().product();
        if data.len() != expected_size {
            return Err(BackendError::InvalidInput(format!(
                "Tensor {} data length {} does not match shape {:?} (expected {})",
                name,
                data.len(),
                shape,
                expected_size
            )));
        }
        Ok(Self { name, shape, data })
    }

    /// A single-element `[1, 1]` tensor, the shape every feature input
    /// of the cardiac model takes.
    pub fn scalar(name: String, value: f32) -> Self {
        Self {
            name,
            shape: vec![1, 1],
            data: vec![value],
        }
    }

    /// The single element of a one-value tensor.
    pub fn scalar_value(&self) -> Result<f32, BackendError> {
        if self.data.len() != 1 {
            return Err(BackendError::InvalidInput(format!(
                "Tensor {} has {} elements, expected exactly 1",
                self.name,
                self.data.len()
            )));
        }
        Ok(self.data[0])
    }
}

/// Pluggable backend trait for model inference
///
/// Implementations provide framework-specific model loading and
/// inference. `infer` is read-only and safe to call concurrently; the
/// server shares one backend behind an `Arc` without locking.
pub trait ModelBackend: Send + Sync {
    /// Run inference with named input tensors
    fn infer(
        &self,
        inputs: HashMap<String, Tensor>,
    ) -> Result<HashMap<String, Tensor>, BackendError>;

    /// Get backend name/identifier
    fn backend_name(&self) -> &str;

    /// Metadata of the loaded model
    fn metadata(&self) -> &ModelMetadata;
}
