//! Content sufficiency filtering.
//!
//! A cleaned file is kept only if enough substance is left once every
//! whitespace character is ignored. Thresholds are per-category, with a
//! default for categories that have no override.
use std::collections::HashMap;

use super::Filter;

/// Minimum non-whitespace character count filter.
///
/// Returns `false` if the text holds fewer than [MinContent::min_chars]
/// non-whitespace unicode codepoints.
pub struct MinContent {
    min_chars: usize,
}

impl MinContent {
    /// specify a minimum count
    pub fn with_min_chars(min_chars: usize) -> Self {
        Self { min_chars }
    }

    /// Get a reference to the filter's min chars.
    pub fn min_chars(&self) -> &usize {
        &self.min_chars
    }
}

impl Filter<&str> for MinContent {
    fn detect(&self, text: &str) -> bool {
        text.chars().filter(|c| !c.is_whitespace()).count() >= self.min_chars
    }
}

impl Default for MinContent {
    /// Default minimum is 250 non-whitespace codepoints.
    fn default() -> Self {
        MinContent { min_chars: 250 }
    }
}

/// Per-category minimum-content configuration.
#[derive(Debug, Clone)]
pub struct ContentThresholds {
    default: usize,
    overrides: HashMap<String, usize>,
}

impl ContentThresholds {
    pub fn new(default: usize, overrides: HashMap<String, usize>) -> Self {
        Self { default, overrides }
    }

    /// Threshold for a category, falling back to the default.
    pub fn for_category(&self, category: &str) -> usize {
        self.overrides.get(category).copied().unwrap_or(self.default)
    }

    /// Filter for a category.
    pub fn filter_for(&self, category: &str) -> MinContent {
        MinContent::with_min_chars(self.for_category(category))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{ContentThresholds, Filter, MinContent};

    #[test]
    fn counts_non_whitespace_only() {
        let f = MinContent::with_min_chars(5);
        assert!(f.detect("ا ب ج د ه"));
        assert!(!f.detect("ا ب ج د"));
        assert!(!f.detect(" \n\t "));
    }

    #[test]
    fn below_threshold_discards() {
        // 40 non-whitespace chars against a threshold of 50
        let text: String = std::iter::repeat("ن ").take(40).collect();
        let f = MinContent::with_min_chars(50);
        assert!(!f.detect(&text));
    }

    #[test]
    fn default_threshold() {
        let f = MinContent::default();
        assert_eq!(f.min_chars(), &250);
    }

    #[test]
    fn category_overrides() {
        let mut overrides = HashMap::new();
        overrides.insert("FATWA".to_string(), 500);
        let thresholds = ContentThresholds::new(250, overrides);
        assert_eq!(thresholds.for_category("FATWA"), 500);
        assert_eq!(thresholds.for_category("RD"), 250);
    }
}
