//! Category configuration.
//!
//! Documents are classed by the top-level folder they were scraped into
//! (`RD`, `FATWA`, `AD`...). This module holds the default code→label tables
//! and the immutable [Categories] structure that the pipelines consume,
//! so that no component reads process-wide mutable state.
use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

use crate::error::Error;

lazy_static! {

    /// Default Arabic document-type labels, keyed by category code.
    /// Used in the metadata header of emitted chunks.
    pub static ref DEFAULT_LABELS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("AD", "قرار إداري");
        m.insert("RD", "مرسوم سلطاني");
        m.insert("FATWA", "فتوى");
        m.insert("RO", "أمر سامٍ");
        m.insert("TA", "اتفاقية دولية");
        m
    };

    /// English names for the category folders, only used in reporting.
    pub static ref FOLDER_NAMES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("RD", "Royal Decrees");
        m.insert("FATWA", "Fatwas");
        m.insert("AD", "Administrative Decisions");
        m.insert("RO", "Royal Orders");
        m.insert("TA", "International Agreements");
        m
    };
}

/// Immutable category configuration handed to the pipelines.
///
/// Holds the ordered keep-list and the (possibly overridden) Arabic labels.
#[derive(Debug, Clone)]
pub struct Categories {
    keep: Vec<String>,
    keep_set: HashSet<String>,
    labels: HashMap<String, String>,
}

impl Categories {
    /// Build from a keep-list and label overrides.
    /// Labels fall back to [struct@DEFAULT_LABELS], then to the code itself.
    pub fn new(keep: Vec<String>, label_overrides: HashMap<String, String>) -> Self {
        let mut labels: HashMap<String, String> = DEFAULT_LABELS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        labels.extend(label_overrides);
        let keep_set = keep.iter().cloned().collect();

        Self {
            keep,
            keep_set,
            labels,
        }
    }

    pub fn keeps(&self, code: &str) -> bool {
        self.keep_set.contains(code)
    }

    /// Keep-list in CLI order, used for stable report ordering.
    pub fn keep_codes(&self) -> &[String] {
        &self.keep
    }

    /// Arabic label for a code, falling back to the code itself.
    pub fn label<'a>(&'a self, code: &'a str) -> &'a str {
        self.labels.get(code).map(String::as_str).unwrap_or(code)
    }

    /// `true` if the code is one of the known qanoon.om folders.
    pub fn is_known(code: &str) -> bool {
        FOLDER_NAMES.contains_key(code)
    }

    /// English folder name for a code, falling back to the code itself.
    pub fn folder_name(code: &str) -> &str {
        FOLDER_NAMES.get(code).copied().unwrap_or(code)
    }
}

/// Split a comma-separated CLI list, dropping empty items.
pub fn parse_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

/// Parse `"AD=300,RD=200"` into a code→threshold map.
///
/// Malformed entries are a configuration mistake and fail the whole run.
pub fn parse_overrides(s: &str) -> Result<HashMap<String, usize>, Error> {
    let mut out = HashMap::new();
    for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (key, value) = part.split_once('=').ok_or_else(|| {
            Error::Custom(format!("bad override '{}'. Use CAT=NUM, e.g. AD=300", part))
        })?;
        let value = value.trim().parse::<usize>().map_err(|e| {
            Error::Custom(format!("bad override value in '{}': {}", part, e))
        })?;
        out.insert(key.trim().to_string(), value);
    }
    Ok(out)
}

/// Parse `"AD=قرار إداري,RD=مرسوم سلطاني"` into a code→label map.
pub fn parse_label_overrides(s: &str) -> Result<HashMap<String, String>, Error> {
    let mut out = HashMap::new();
    for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (key, value) = part.split_once('=').ok_or_else(|| {
            Error::Custom(format!(
                "bad label override '{}'. Use CAT=LABEL, e.g. AD=قرار إداري",
                part
            ))
        })?;
        out.insert(key.trim().to_string(), value.trim().to_string());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_labels() {
        let cats = Categories::new(vec!["RD".to_string()], HashMap::new());
        assert_eq!(cats.label("RD"), "مرسوم سلطاني");
        assert_eq!(cats.label("XX"), "XX");
    }

    #[test]
    fn label_override() {
        let mut overrides = HashMap::new();
        overrides.insert("RD".to_string(), "decree".to_string());
        let cats = Categories::new(vec!["RD".to_string()], overrides);
        assert_eq!(cats.label("RD"), "decree");
    }

    #[test]
    fn keep_list() {
        let cats = Categories::new(parse_list("FATWA, RD,AD"), HashMap::new());
        assert!(cats.keeps("RD"));
        assert!(!cats.keeps("TA"));
        assert_eq!(cats.keep_codes(), &["FATWA", "RD", "AD"]);
    }

    #[test]
    fn overrides_parse() {
        let o = parse_overrides("AD=300, RD=200,FATWA=500").unwrap();
        assert_eq!(o["AD"], 300);
        assert_eq!(o["RD"], 200);
        assert_eq!(o["FATWA"], 500);
        assert!(parse_overrides("").unwrap().is_empty());
    }

    #[test]
    fn overrides_malformed() {
        assert!(parse_overrides("AD300").is_err());
        assert!(parse_overrides("AD=lots").is_err());
    }
}
