//! Dense-network backend loaded from a JSON artifact.
//!
//! The trained classifier is exported offline as JSON: metadata, the
//! input feature names in model order, and fully-connected layers as
//! row-major weight matrices with per-unit biases.

use crate::backend::{BackendError, ModelBackend, Tensor};
use crate::metadata::ModelMetadata;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Per-layer activation function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    Relu,
    Sigmoid,
    Linear,
}

impl Activation {
    fn apply(self, x: f32) -> f32 {
        match self {
            Activation::Relu => x.max(0.0),
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activation::Linear => x,
        }
    }
}

/// One fully-connected layer: `weights[i]` holds the incoming weights
/// of output unit `i`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenseLayer {
    pub weights: Vec<Vec<f32>>,
    pub biases: Vec<f32>,
    pub activation: Activation,
}

/// On-disk artifact layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenseArtifact {
    pub metadata: ModelMetadata,
    pub inputs: Vec<String>,
    pub layers: Vec<DenseLayer>,
}

/// Dense-network inference backend.
///
/// Holds no interior mutability; `infer` only reads weights, so one
/// instance serves concurrent requests without a lock.
#[derive(Debug)]
pub struct DenseBackend {
    metadata: ModelMetadata,
    inputs: Vec<String>,
    layers: Vec<DenseLayer>,
}

impl DenseBackend {
    /// Load and validate an artifact from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BackendError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            BackendError::LoadError(format!("cannot read {}: {e}", path.display()))
        })?;
        let artifact: DenseArtifact = serde_json::from_str(&text).map_err(|e| {
            BackendError::LoadError(format!("malformed artifact {}: {e}", path.display()))
        })?;
        let backend = Self::from_artifact(artifact)?;
        info!(
            "loaded model {} v{} from {} ({} inputs, {} layers)",
            backend.metadata.name,
            backend.metadata.version,
            path.display(),
            backend.inputs.len(),
            backend.layers.len()
        );
        Ok(backend)
    }

    /// Validate layer dimensions and build the backend.
    pub fn from_artifact(artifact: DenseArtifact) -> Result<Self, BackendError> {
        if artifact.inputs.is_empty() {
            return Err(BackendError::LoadError("artifact declares no inputs".into()));
        }
        if artifact.layers.is_empty() {
            return Err(BackendError::LoadError("artifact declares no layers".into()));
        }

        let mut width = artifact.inputs.len();
        for (idx, layer) in artifact.layers.iter().enumerate() {
            if layer.weights.len() != layer.biases.len() {
                return Err(BackendError::LoadError(format!(
                    "layer {idx}: {} weight rows but {} biases",
                    layer.weights.len(),
                    layer.biases.len()
                )));
            }
            for (unit, row) in layer.weights.iter().enumerate() {
                if row.len() != width {
                    return Err(BackendError::LoadError(format!(
                        "layer {idx} unit {unit}: {} weights, expected {width}",
                        row.len()
                    )));
                }
            }
            width = layer.weights.len();
        }
        if width != 1 {
            return Err(BackendError::LoadError(format!(
                "final layer has {width} units, expected a single probability output"
            )));
        }

        Ok(Self {
            metadata: artifact.metadata,
            inputs: artifact.inputs,
            layers: artifact.layers,
        })
    }

    /// Input feature names in model order.
    pub fn input_names(&self) -> &[String] {
        &self.inputs
    }

    fn forward(&self, mut x: Vec<f32>) -> f32 {
        for layer in &self.layers {
            let mut out = Vec::with_capacity(layer.weights.len());
            for (row, bias) in layer.weights.iter().zip(&layer.biases) {
                let z: f32 = row.iter().zip(&x).map(|(w, xi)| w * xi).sum::<f32>() + bias;
                out.push(layer.activation.apply(z));
            }
            x = out;
        }
        // dims validated at load time; the last layer has one unit
        x[0]
    }
}

impl ModelBackend for DenseBackend {
    fn infer(
        &self,
        inputs: HashMap<String, Tensor>,
    ) -> Result<HashMap<String, Tensor>, BackendError> {
        let mut x = Vec::with_capacity(self.inputs.len());
        for name in &self.inputs {
            let tensor = inputs.get(name).ok_or_else(|| {
                BackendError::InvalidInput(format!("missing input tensor {name:?}"))
            })?;
            x.push(tensor.scalar_value()?);
        }

        let y = self.forward(x);
        let mut out = HashMap::new();
        out.insert("output".to_string(), Tensor::scalar("output".into(), y));
        Ok(out)
    }

    fn backend_name(&self) -> &str {
        "dense"
    }

    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::ModelVersion;
    use pretty_assertions::assert_eq;

    fn single_layer_artifact(weights: Vec<f32>, bias: f32, activation: Activation) -> DenseArtifact {
        let inputs: Vec<String> = (0..weights.len()).map(|i| format!("x{i}")).collect();
        DenseArtifact {
            metadata: ModelMetadata::new("test-net".into(), ModelVersion::new(1, 0, 0)),
            inputs,
            layers: vec![DenseLayer {
                weights: vec![weights],
                biases: vec![bias],
                activation,
            }],
        }
    }

    fn scalar_inputs(values: &[f32]) -> HashMap<String, Tensor> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| (format!("x{i}"), Tensor::scalar(format!("x{i}"), v)))
            .collect()
    }

    #[test]
    fn linear_layer_computes_dot_product() {
        let backend =
            DenseBackend::from_artifact(single_layer_artifact(vec![0.5, 1.5, -1.0], 0.25, Activation::Linear))
                .unwrap();
        let out = backend.infer(scalar_inputs(&[2.0, -1.0, 0.5])).unwrap();
        let y = out.get("output").unwrap().scalar_value().unwrap();
        // 0.5*2.0 + 1.5*(-1.0) + (-1.0)*0.5 + 0.25 = -0.75
        assert!((y - (-0.75)).abs() < 1e-6);
    }

    #[test]
    fn sigmoid_output_is_a_probability() {
        let backend =
            DenseBackend::from_artifact(single_layer_artifact(vec![3.0], 0.0, Activation::Sigmoid))
                .unwrap();
        let out = backend.infer(scalar_inputs(&[10.0])).unwrap();
        let y = out.get("output").unwrap().scalar_value().unwrap();
        assert!(y > 0.99 && y <= 1.0);
    }

    #[test]
    fn relu_hidden_layer_feeds_forward() {
        let artifact = DenseArtifact {
            metadata: ModelMetadata::new("test-net".into(), ModelVersion::new(1, 0, 0)),
            inputs: vec!["x0".into(), "x1".into()],
            layers: vec![
                DenseLayer {
                    weights: vec![vec![1.0, 0.0], vec![0.0, -1.0]],
                    biases: vec![0.0, 0.0],
                    activation: Activation::Relu,
                },
                DenseLayer {
                    weights: vec![vec![1.0, 1.0]],
                    biases: vec![0.0],
                    activation: Activation::Linear,
                },
            ],
        };
        let backend = DenseBackend::from_artifact(artifact).unwrap();
        // hidden = [relu(2.0), relu(-3.0)] = [2.0, 0.0]; output = 2.0
        let out = backend.infer(scalar_inputs(&[2.0, 3.0])).unwrap();
        assert_eq!(out.get("output").unwrap().scalar_value().unwrap(), 2.0);
    }

    #[test]
    fn missing_input_tensor_is_an_error() {
        let backend =
            DenseBackend::from_artifact(single_layer_artifact(vec![1.0, 1.0], 0.0, Activation::Linear))
                .unwrap();
        let result = backend.infer(scalar_inputs(&[1.0]));
        assert!(matches!(result.unwrap_err(), BackendError::InvalidInput(_)));
    }

    #[test]
    fn dimension_mismatch_fails_at_load() {
        let mut artifact = single_layer_artifact(vec![1.0, 1.0], 0.0, Activation::Linear);
        artifact.inputs.push("x2".into());
        assert!(matches!(
            DenseBackend::from_artifact(artifact).unwrap_err(),
            BackendError::LoadError(_)
        ));
    }

    #[test]
    fn multi_unit_final_layer_fails_at_load() {
        let artifact = DenseArtifact {
            metadata: ModelMetadata::new("test-net".into(), ModelVersion::new(1, 0, 0)),
            inputs: vec!["x0".into()],
            layers: vec![DenseLayer {
                weights: vec![vec![1.0], vec![2.0]],
                biases: vec![0.0, 0.0],
                activation: Activation::Linear,
            }],
        };
        assert!(DenseBackend::from_artifact(artifact).is_err());
    }

    #[test]
    fn load_round_trips_through_disk() {
        let artifact = single_layer_artifact(vec![0.1, 0.2], 0.3, Activation::Sigmoid);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, serde_json::to_string(&artifact).unwrap()).unwrap();

        let backend = DenseBackend::load(&path).unwrap();
        assert_eq!(backend.metadata().name, "test-net");
        assert_eq!(backend.input_names(), ["x0", "x1"]);
    }

    #[test]
    fn load_fails_on_missing_or_malformed_file() {
        assert!(matches!(
            DenseBackend::load("no/such/model.json").unwrap_err(),
            BackendError::LoadError(_)
        ));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            DenseBackend::load(&path).unwrap_err(),
            BackendError::LoadError(_)
        ));
    }
}
