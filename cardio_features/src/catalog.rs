//! Static declaration of the 13 expected features and their canonical order.

use serde::{Deserialize, Serialize};

/// Semantic type of a feature, as recorded in the training data.
///
/// Declared for documentation and auditing; coercion is deliberately not
/// scoped by kind (see `coerce`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureKind {
    Numeric,
    BooleanLike,
    CategoricalNumeric,
}

/// One entry of the feature catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSpec {
    pub canonical_name: &'static str,
    pub position: usize,
    pub kind: FeatureKind,
}

pub const FEATURE_COUNT: usize = 13;

/// The catalog, in canonical order. Position is load-bearing: the model
/// binds inputs by position, not by name, so reordering breaks
/// predictions silently.
pub const CATALOG: [FeatureSpec; FEATURE_COUNT] = [
    FeatureSpec {
        canonical_name: "age",
        position: 0,
        kind: FeatureKind::Numeric,
    },
    FeatureSpec {
        canonical_name: "sex",
        position: 1,
        kind: FeatureKind::BooleanLike,
    },
    FeatureSpec {
        canonical_name: "chest_pain_type",
        position: 2,
        kind: FeatureKind::CategoricalNumeric,
    },
    FeatureSpec {
        canonical_name: "bp",
        position: 3,
        kind: FeatureKind::Numeric,
    },
    FeatureSpec {
        canonical_name: "cholesterol",
        position: 4,
        kind: FeatureKind::Numeric,
    },
    FeatureSpec {
        canonical_name: "fbs_over_120",
        position: 5,
        kind: FeatureKind::BooleanLike,
    },
    FeatureSpec {
        canonical_name: "ekg_results",
        position: 6,
        kind: FeatureKind::CategoricalNumeric,
    },
    FeatureSpec {
        canonical_name: "max_hr",
        position: 7,
        kind: FeatureKind::Numeric,
    },
    FeatureSpec {
        canonical_name: "exercise_angina",
        position: 8,
        kind: FeatureKind::BooleanLike,
    },
    FeatureSpec {
        canonical_name: "st_depression",
        position: 9,
        kind: FeatureKind::Numeric,
    },
    FeatureSpec {
        canonical_name: "slope_of_st",
        position: 10,
        kind: FeatureKind::CategoricalNumeric,
    },
    FeatureSpec {
        canonical_name: "number_of_vessels_fluro",
        position: 11,
        kind: FeatureKind::CategoricalNumeric,
    },
    FeatureSpec {
        canonical_name: "thallium",
        position: 12,
        kind: FeatureKind::CategoricalNumeric,
    },
];

/// Display label -> canonical name, as the frontend sends fields.
const DISPLAY_LABELS: [(&str, &str); FEATURE_COUNT] = [
    ("Age", "age"),
    ("Sex", "sex"),
    ("Chest pain type", "chest_pain_type"),
    ("BP", "bp"),
    ("Cholesterol", "cholesterol"),
    ("FBS over 120", "fbs_over_120"),
    ("EKG results", "ekg_results"),
    ("Max HR", "max_hr"),
    ("Exercise angina", "exercise_angina"),
    ("ST depression", "st_depression"),
    ("Slope of ST", "slope_of_st"),
    ("Number of vessels fluro", "number_of_vessels_fluro"),
    ("Thallium", "thallium"),
];

/// The 13 canonical names in vector order.
pub fn canonical_names() -> Vec<&'static str> {
    CATALOG.iter().map(|spec| spec.canonical_name).collect()
}

fn normalize_label(label: &str) -> String {
    label.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Resolve a client-facing field label to its canonical name.
///
/// Lookup tolerates casing and spacing differences; unknown labels
/// resolve to `None` and are ignored by the mapper.
pub fn canonical_for_label(label: &str) -> Option<&'static str> {
    let wanted = normalize_label(label);
    DISPLAY_LABELS
        .iter()
        .find(|(display, _)| normalize_label(display) == wanted)
        .map(|&(_, canonical)| canonical)
}
