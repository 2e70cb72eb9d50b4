use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Central configuration for the classifier: the two smoothing parameters
/// and optional per-category cutoffs.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ClassifierConfig {
    /// Prior probability assumed for any feature/category pair before
    /// evidence accumulates. Must be in [0, 1].
    pub assumed_probability: f64,

    /// Virtual count of the assumed prior, in units of observed feature
    /// occurrences. Controls how much evidence is needed to override the
    /// prior. Should be >= 0; negative values are not rejected but produce
    /// undefined estimates.
    pub assumed_weight: f64,

    /// Minimum combined-probability score required to assign a category.
    /// Categories absent from this map default to 0.
    #[serde(default)]
    pub cutoffs: HashMap<String, f64>,
}

impl ClassifierConfig {
    pub fn new(assumed_probability: f64, assumed_weight: f64) -> Self {
        Self {
            assumed_probability,
            assumed_weight,
            cutoffs: HashMap::new(),
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            assumed_probability: 0.5,
            assumed_weight: 1.0,
            cutoffs: HashMap::new(),
        }
    }
}
