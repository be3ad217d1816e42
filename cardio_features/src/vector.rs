//! Ordered feature-vector assembly with default fill.

use log::warn;

use crate::catalog::{CATALOG, FEATURE_COUNT};
use crate::mapping::CoercedFeatures;

/// The complete model input: always 13 values, one per catalog
/// position, plus the names of features that had to be defaulted.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledVector {
    pub values: [f64; FEATURE_COUNT],
    pub missing: Vec<&'static str>,
}

/// Build the full vector. Features absent from the coerced input take
/// 0.0 and are reported as missing; assembly itself never fails.
pub fn assemble(features: &CoercedFeatures) -> AssembledVector {
    let mut values = [0.0; FEATURE_COUNT];
    let mut missing = Vec::new();

    for spec in &CATALOG {
        match features.get(spec.canonical_name) {
            Some(&x) => values[spec.position] = x,
            None => missing.push(spec.canonical_name),
        }
    }

    if !missing.is_empty() {
        warn!("missing features defaulted to 0.0: {missing:?}");
    }

    AssembledVector { values, missing }
}
