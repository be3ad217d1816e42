//! Coercion of arbitrary request values into model floats.
//!
//! An ordered list of parse strategies is tried in turn; the first
//! success wins, and exhausting the list yields 0.0 rather than an
//! error. Malformed client input degrades, it never fails a request.

use log::debug;
use serde_json::Value as JsonValue;

/// A request value at the boundary, before coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl RawValue {
    /// Classify a JSON scalar. Nulls, arrays, and objects carry no
    /// usable scalar and fall through to the coercion default.
    pub fn from_json(value: &JsonValue) -> Option<Self> {
        match value {
            JsonValue::Number(n) => n.as_f64().map(RawValue::Number),
            JsonValue::Bool(b) => Some(RawValue::Bool(*b)),
            JsonValue::String(s) => Some(RawValue::Text(s.clone())),
            _ => None,
        }
    }
}

/// Rule 1: values that are already numeric. Booleans count as numeric
/// here (true = 1.0, false = 0.0).
fn direct_numeric(value: &RawValue) -> Option<f64> {
    match value {
        RawValue::Number(x) => Some(*x),
        RawValue::Bool(b) => Some(f64::from(*b)),
        RawValue::Text(_) => None,
    }
}

/// Rule 2: numeric parse of the raw text as sent.
fn raw_text_numeric(value: &RawValue) -> Option<f64> {
    match value {
        RawValue::Text(s) => s.parse::<f64>().ok(),
        _ => None,
    }
}

/// Rule 3: fixed token vocabulary on the lowercased, trimmed text.
///
/// The vocabulary applies regardless of which feature the value
/// targets: "yes" sent for a numeric feature still coerces to 1.0.
fn vocabulary(value: &RawValue) -> Option<f64> {
    match value {
        RawValue::Text(s) => match s.trim().to_lowercase().as_str() {
            "yes" | "y" | "true" | "1" => Some(1.0),
            "no" | "n" | "false" | "0" => Some(0.0),
            "male" | "m" => Some(1.0),
            "female" | "f" => Some(0.0),
            _ => None,
        },
        _ => None,
    }
}

/// Rule 4: numeric parse once more, on the normalized token.
fn normalized_text_numeric(value: &RawValue) -> Option<f64> {
    match value {
        RawValue::Text(s) => s.trim().to_lowercase().parse::<f64>().ok(),
        _ => None,
    }
}

const STRATEGIES: [fn(&RawValue) -> Option<f64>; 4] = [
    direct_numeric,
    raw_text_numeric,
    vocabulary,
    normalized_text_numeric,
];

/// Coerce one raw value to a float, defaulting to 0.0 when every
/// strategy fails.
pub fn coerce(value: &RawValue) -> f64 {
    for strategy in STRATEGIES {
        if let Some(x) = strategy(value) {
            return x;
        }
    }
    debug!("unparseable value {value:?}, defaulting to 0.0");
    0.0
}

/// Coerce a JSON value directly. Non-scalar JSON coerces to 0.0.
pub fn coerce_json(value: &JsonValue) -> f64 {
    match RawValue::from_json(value) {
        Some(raw) => coerce(&raw),
        None => {
            debug!("non-scalar value {value}, defaulting to 0.0");
            0.0
        }
    }
}
