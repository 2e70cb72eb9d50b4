//! The core Fisher-method document classifier.
//!
//! Owns the feature/category frequency tables and the two smoothing
//! parameters, and exposes training, the probability primitives, and the
//! cutoff-gated classification decision. All operations are pure in-memory
//! computation; nothing here blocks on I/O or fails for well-formed input.
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::config::ClassifierConfig;
use crate::features::Featurize;
use crate::stats::fisher_combine;

/// A supervised document classifier.
///
/// Frequency counts accumulate across repeated `train` calls in any order;
/// duplicate training data simply accumulates (no dedup). Mutation requires
/// `&mut self`, so concurrent misuse is unrepresentable without an external
/// synchronization wrapper, which is left to the embedding application.
#[derive(Debug, Clone)]
pub struct Classifier {
    /// feature -> category -> occurrence count.
    feature_category_counts: HashMap<String, HashMap<String, u64>>,
    /// category -> trained document count. Sole source of truth for known
    /// categories; a BTreeMap so enumeration is stable and sorted by label.
    category_counts: BTreeMap<String, u64>,
    assumed_probability: f64,
    assumed_weight: f64,
    cutoffs: HashMap<String, f64>,
}

impl Classifier {
    /// Create a classifier with the given smoothing parameters.
    ///
    /// # Arguments
    ///
    /// * `assumed_probability` - Prior probability assumed for any
    ///   feature/category pair before evidence accumulates, in [0, 1].
    /// * `assumed_weight` - Virtual count of the prior, in units of observed
    ///   feature occurrences. Should be >= 0; negative values are not
    ///   rejected but produce undefined estimates.
    pub fn new(assumed_probability: f64, assumed_weight: f64) -> Self {
        Self {
            feature_category_counts: HashMap::new(),
            category_counts: BTreeMap::new(),
            assumed_probability,
            assumed_weight,
            cutoffs: HashMap::new(),
        }
    }

    /// Create a classifier from a config, applying its cutoffs.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        let mut classifier = Self::new(config.assumed_probability, config.assumed_weight);
        for (category, cutoff) in &config.cutoffs {
            classifier.set_cutoff(category, *cutoff);
        }
        classifier
    }

    /// Train the classifier with a document of known category.
    ///
    /// Every feature occurrence in the document's feature list increments
    /// that feature's count for `category` (duplicates count multiply); the
    /// category's document count is incremented exactly once per call. An
    /// empty feature list is legal and contributes to the document count
    /// only.
    pub fn train(&mut self, item: &impl Featurize, category: &str) {
        for feature in item.features() {
            *self
                .feature_category_counts
                .entry(feature)
                .or_default()
                .entry(category.to_string())
                .or_insert(0) += 1;
        }
        *self.category_counts.entry(category.to_string()).or_insert(0) += 1;
    }

    /// Occurrences of `feature` recorded for `category`.
    pub fn feature_count(&self, feature: &str, category: &str) -> u64 {
        self.feature_category_counts
            .get(feature)
            .and_then(|per_category| per_category.get(category))
            .copied()
            .unwrap_or(0)
    }

    /// Number of documents trained into `category`.
    pub fn category_count(&self, category: &str) -> u64 {
        self.category_counts.get(category).copied().unwrap_or(0)
    }

    /// Total number of trained documents across all categories.
    pub fn total_count(&self) -> u64 {
        self.category_counts.values().sum()
    }

    /// Known categories (those with at least one trained document), sorted
    /// by label.
    pub fn categories(&self) -> Vec<&str> {
        self.category_counts.keys().map(String::as_str).collect()
    }

    /// P(feature | category) from raw counts. A category with zero trained
    /// documents yields a clean 0.0 instead of a division by zero.
    fn raw_probability(&self, feature: &str, category: &str) -> f64 {
        let documents = self.category_count(category);
        if documents == 0 {
            return 0.0;
        }
        self.feature_count(feature, category) as f64 / documents as f64
    }

    /// Bayes-normalized P(category | feature): the raw per-category
    /// frequency divided by the sum of raw frequencies over all known
    /// categories. Short-circuits to 0.0 when the raw probability is zero,
    /// avoiding a 0/0 when the feature is unseen everywhere.
    fn conditional_probability(&self, feature: &str, category: &str) -> f64 {
        let raw = self.raw_probability(feature, category);
        if raw == 0.0 {
            return 0.0;
        }
        let frequency_sum: f64 = self
            .category_counts
            .keys()
            .map(|current| self.raw_probability(feature, current))
            .sum();
        raw / frequency_sum
    }

    /// Smoothed P(category | feature): the conditional probability blended
    /// with the assumed prior, weighted by evidence volume.
    ///
    /// With `n` the feature's total occurrences across all categories
    /// (occurrence count, not document count), `w` the assumed weight and
    /// `p0` the assumed probability:
    ///
    /// (w * p0 + n * conditional) / (w + n)
    ///
    /// An unseen feature therefore returns exactly `p0`; as `n` grows past
    /// `w` the estimate converges to the conditional probability and the
    /// prior's influence vanishes.
    pub fn weighted_probability(&self, feature: &str, category: &str) -> f64 {
        let occurrences: u64 = self
            .feature_category_counts
            .get(feature)
            .map(|per_category| per_category.values().sum())
            .unwrap_or(0);
        let n = occurrences as f64;
        if self.assumed_weight + n == 0.0 {
            // Zero weight and zero evidence would be 0/0.
            return self.assumed_probability;
        }
        let conditional = self.conditional_probability(feature, category);
        (self.assumed_weight * self.assumed_probability + n * conditional)
            / (self.assumed_weight + n)
    }

    /// Combined confidence that `item` belongs in `category`, in [0, 1].
    ///
    /// Applies Fisher's method over the weighted probabilities of the item's
    /// features; see [`fisher_combine`] for the statistic and its
    /// degenerate-case handling (a featureless item scores 0.0).
    pub fn fisher_probability(&self, item: &impl Featurize, category: &str) -> f64 {
        let probs: Vec<f64> = item
            .features()
            .iter()
            .map(|feature| self.weighted_probability(feature, category))
            .collect();
        fisher_combine(&probs)
    }

    /// Set the minimum combined-probability score required to place an item
    /// in `category`. Categories with no explicit cutoff default to 0.
    pub fn set_cutoff(&mut self, category: &str, cutoff: f64) {
        self.cutoffs.insert(category.to_string(), cutoff);
    }

    /// Classify an item.
    ///
    /// Scores every known category with [`Self::fisher_probability`] and
    /// returns the highest-scoring category whose score strictly exceeds
    /// both 0 and that category's cutoff, or `None` when no category
    /// qualifies (including before any training). Categories are evaluated
    /// in sorted label order, so of several equal-scoring categories the
    /// alphabetically first wins.
    pub fn classify(&self, item: &impl Featurize) -> Option<String> {
        let features = item.features();
        let mut best: Option<&str> = None;
        let mut max = 0.0;
        for category in self.category_counts.keys() {
            let probs: Vec<f64> = features
                .iter()
                .map(|feature| self.weighted_probability(feature, category))
                .collect();
            let score = fisher_combine(&probs);
            let cutoff = self.cutoffs.get(category.as_str()).copied().unwrap_or(0.0);
            if score > cutoff && score > max {
                best = Some(category);
                max = score;
            }
        }
        best.map(str::to_string)
    }

    /// Discard all frequency counts and cutoffs, keeping the smoothing
    /// parameters. The only operation that shrinks classifier state.
    pub fn reset(&mut self) {
        self.feature_category_counts.clear();
        self.category_counts.clear();
        self.cutoffs.clear();
    }

    /// Log a one-line summary of the accumulated training state.
    pub fn log_summary(&self) {
        log::info!(
            "classifier holds {} documents across {} categories ({} distinct features)",
            self.total_count(),
            self.category_counts.len(),
            self.feature_category_counts.len()
        );
    }
}

/// Human-readable dump of the feature -> category -> count table as indented
/// JSON. For inspection and debugging only; not a stable serialization
/// format.
impl fmt::Display for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pretty =
            serde_json::to_string_pretty(&self.feature_category_counts).map_err(|_| fmt::Error)?;
        f.write_str(&pretty)
    }
}
