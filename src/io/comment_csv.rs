//! CSV comment reader and featurizer.
//!
//! Reads comment datasets in the YouTube Spam Collection layout (header row
//! with id, author, content and label columns) and derives classification
//! features from each comment: one author-identity feature plus overlapping
//! bigram windows over the normalized content words.
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use csv::StringRecord;
use serde::{Deserialize, Serialize};

use crate::features::Featurize;

/// Content n-gram window width.
const NGRAM_SIZE: usize = 2;

/// A single comment row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub comment_id: String,
    pub author: String,
    pub content: String,
    pub is_spam: bool,
}

impl Featurize for Comment {
    /// One `[author]` feature for the comment's author, then a `[content]`
    /// feature per overlapping bigram of the content lowercased and stripped
    /// to ASCII letters and spaces.
    fn features(&self) -> Vec<String> {
        let mut out = vec![format!("[author]{}", self.author)];
        let normalized = normalize(&self.content);
        let words: Vec<&str> = normalized.split_whitespace().collect();
        for window in words.windows(NGRAM_SIZE) {
            out.push(format!("[content]{}", window.join(" ")));
        }
        out
    }
}

/// Lowercase and drop everything but ASCII letters and spaces.
fn normalize(content: &str) -> String {
    content
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || *c == ' ')
        .collect()
}

/// Configuration for reading comment CSV files.
#[derive(Debug, Clone)]
pub struct CommentReaderConfig {
    /// Column name holding the comment identifier.
    pub id_column: String,
    /// Column name holding the author.
    pub author_column: String,
    /// Column name holding the comment text.
    pub content_column: String,
    /// Column name holding the spam label; the value `1` marks spam.
    pub label_column: String,
}

impl Default for CommentReaderConfig {
    fn default() -> Self {
        Self {
            id_column: "COMMENT_ID".to_string(),
            author_column: "AUTHOR".to_string(),
            content_column: "CONTENT".to_string(),
            label_column: "CLASS".to_string(),
        }
    }
}

/// Read a comment CSV file with the default column layout.
pub fn load_comments<P: AsRef<Path>>(path: P) -> Result<Vec<Comment>> {
    load_comments_with_config(path, &CommentReaderConfig::default())
}

/// Read a comment CSV file using a custom column configuration.
///
/// The header row is required and column names are matched
/// case-insensitively. Truncated rows and missing columns are reported as
/// errors with their row number; no partial rows are returned.
pub fn load_comments_with_config<P: AsRef<Path>>(
    path: P,
    config: &CommentReaderConfig,
) -> Result<Vec<Comment>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(&path)
        .with_context(|| format!("Failed to open comment file: {}", path.as_ref().display()))?;

    let headers = reader
        .headers()
        .context("Failed to read comment header row")?
        .clone();

    let id_idx = find_column(&headers, &config.id_column)
        .ok_or_else(|| anyhow!("Missing id column '{}'", config.id_column))?;
    let author_idx = find_column(&headers, &config.author_column)
        .ok_or_else(|| anyhow!("Missing author column '{}'", config.author_column))?;
    let content_idx = find_column(&headers, &config.content_column)
        .ok_or_else(|| anyhow!("Missing content column '{}'", config.content_column))?;
    let label_idx = find_column(&headers, &config.label_column)
        .ok_or_else(|| anyhow!("Missing label column '{}'", config.label_column))?;

    let mut out = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;

        let field = |idx: usize, name: &str| -> Result<&str> {
            record
                .get(idx)
                .ok_or_else(|| anyhow!("Missing {} value at row {}", name, row_idx + 1))
        };

        out.push(Comment {
            comment_id: field(id_idx, "id")?.to_string(),
            author: field(author_idx, "author")?.to_string(),
            content: field(content_idx, "content")?.to_string(),
            is_spam: field(label_idx, "label")?.trim() == "1",
        });
    }

    log::debug!(
        "loaded {} comments from {}",
        out.len(),
        path.as_ref().display()
    );
    Ok(out)
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(name))
}
