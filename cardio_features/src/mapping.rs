//! Display-label mapping from a raw request into coerced features.

use log::debug;
use serde_json::{Map, Value as JsonValue};
use std::collections::HashMap;

use crate::catalog;
use crate::coerce;

/// Canonical name -> coerced float, for the subset of the 13 features
/// the client actually sent.
pub type CoercedFeatures = HashMap<&'static str, f64>;

/// Map a request body onto canonical feature names, coercing each value.
///
/// Keys that do not resolve to a catalog feature are ignored; unknown
/// client fields never fail the request.
pub fn map_request(body: &Map<String, JsonValue>) -> CoercedFeatures {
    let mut out = CoercedFeatures::new();
    for (key, value) in body {
        match catalog::canonical_for_label(key) {
            Some(canonical) => {
                out.insert(canonical, coerce::coerce_json(value));
            }
            None => debug!("ignoring unknown field {key:?}"),
        }
    }
    out
}
