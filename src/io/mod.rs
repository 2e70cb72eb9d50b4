//! Readers for external document formats.
//!
//! The classifier core never touches files; these loaders convert on-disk
//! data into featurizable documents and surface malformed input as errors
//! before anything reaches the classifier.
pub mod comment_csv;

pub use comment_csv::{load_comments, load_comments_with_config, Comment, CommentReaderConfig};
