//! Request normalization for the cardiac risk predictor.
//!
//! Turns a loosely-typed JSON request (display labels, arbitrary value
//! representations) into the fixed-order 13-element feature vector the
//! model expects. Every per-field anomaly degrades to a default value;
//! nothing in this crate fails a request.

pub mod catalog;
pub mod coerce;
pub mod mapping;
pub mod vector;

pub use catalog::{canonical_names, FeatureKind, FeatureSpec, CATALOG, FEATURE_COUNT};
pub use coerce::{coerce, coerce_json, RawValue};
pub use mapping::{map_request, CoercedFeatures};
pub use vector::{assemble, AssembledVector};
