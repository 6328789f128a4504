//! Legal-article segmentation.
//!
//! Omani decrees and similar acts are structured as numbered articles,
//! each opened by a heading line like `المادة (1)` or `مادة 1`. Splitting
//! at those headings yields spans that are natural training units, better
//! than arbitrary paragraph windows.
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Lines opening a numbered article: `المادة (1)`, `مادة 12`...
    static ref ARTICLE_HEADING: Regex =
        Regex::new(r"^\s*(?:المادة|مادة)\s+\(?\d+\)?").unwrap();
}

/// Split a document into article spans.
///
/// Splits happen at line boundaries so a heading is never separated from
/// the text that follows it. Returns `None` unless at least two non-empty
/// spans result; a single span means the structural markers are absent and
/// the caller should fall back to plain paragraph chunking.
pub fn split_by_articles(text: &str) -> Option<Vec<String>> {
    let mut spans: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if ARTICLE_HEADING.is_match(line) {
            spans.push(current.join("\n"));
            current = Vec::new();
        }
        current.push(line);
    }
    spans.push(current.join("\n"));

    let spans: Vec<String> = spans
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if spans.len() > 1 {
        Some(spans)
    } else {
        None
    }
}
