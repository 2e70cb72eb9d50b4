//! fisher-classifier: a supervised text classifier based on Fisher's method.
//!
//! Training documents reduced to discrete string features accumulate
//! per-category frequency counts; classification blends each feature's
//! observed conditional probability with an assumed prior, combines the
//! per-feature estimates into one category confidence via Fisher's method
//! (chi-squared combination), and applies a cutoff-gated arg-max over
//! categories.
//!
//! The design favors small, testable modules: the core `Classifier` is pure
//! in-memory computation, the `Featurize` trait is the only contract a
//! document type must satisfy, and the `io` module holds the CSV comment
//! loader used by the spam-filtering tests.
pub mod classifier;
pub mod config;
pub mod features;
pub mod io;
pub mod stats;

pub use classifier::Classifier;
pub use config::ClassifierConfig;
pub use features::Featurize;
