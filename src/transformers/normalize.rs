//! Raw text canonicalization.
//!
//! Scraped pages come with BOMs, stray directional marks from copy/paste,
//! Windows line endings and runs of padding whitespace. [normalize] folds
//! all of that into a single canonical form so that the downstream
//! line-oriented passes (noise stripping, article segmentation, paragraph
//! chunking) see one consistent shape of text.
use lazy_static::lazy_static;
use regex::Regex;

use super::Transform;
use crate::pipelines::prep::types::Document;

lazy_static! {
    static ref HORIZONTAL_WS: Regex = Regex::new(r"[ \t]+").unwrap();
    static ref BLANK_RUNS: Regex = Regex::new(r"\n{3,}").unwrap();
}

/// Removed outright: BOM, RTL/LTR marks, lossy-decode replacement char.
const STRIPPED_MARKS: [char; 4] = ['\u{feff}', '\u{200f}', '\u{200e}', '\u{fffd}'];

/// Canonicalize raw text.
///
/// Unifies line endings to `\n`, drops invisible marks, collapses runs of
/// spaces/tabs to a single space and runs of blank lines to a single blank
/// line, then trims. Pure function, never fails; the result may be empty.
pub fn normalize(raw: &str) -> String {
    let text = raw.replace("\r\n", "\n").replace('\r', "\n");
    let text: String = text.chars().filter(|c| !STRIPPED_MARKS.contains(c)).collect();
    let text = HORIZONTAL_WS.replace_all(&text, " ");
    let text = BLANK_RUNS.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// [Transform] wrapper around [normalize].
#[derive(Debug, Default)]
pub struct Normalize;

impl Transform for Normalize {
    fn transform_own(&self, mut doc: Document) -> Document {
        let normalized = normalize(doc.content());
        doc.set_content(normalized);
        doc
    }
}
