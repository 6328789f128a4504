//! Leading download-link boilerplate removal.
//!
//! Pages scraped from qanoon.om start with the site's download widget,
//! which survives text extraction as one or two junk lines:
//!
//! ```text
//! تحميل
//! English
//!
//! مرسوم سلطاني رقم ...
//! ```
//!
//! Observed shapes are `تحميل` alone, `تحميل` + `English`, `تحميل` +
//! `تحميل`, possibly repeated and interleaved with blank lines. The
//! stripper removes these patterns from the *head* of the document only;
//! the same tokens occurring in the body are legitimate text and are left
//! untouched.
//!
//! The removal loop is an explicit state machine so the three widget
//! shapes are visible as transitions rather than nested conditionals.
use super::Transform;
use crate::pipelines::prep::types::Document;

const DOWNLOAD_MARKER: &str = "تحميل";
const ENGLISH_MARKER: &str = "english";

/// Stripper states. `FoundMarker` means a download marker was just
/// removed and a trailing `English`/second marker may follow.
enum State {
    Seeking,
    FoundMarker,
    Done,
}

fn is_download_line(line: &str) -> bool {
    line.trim() == DOWNLOAD_MARKER
}

fn is_english_line(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(ENGLISH_MARKER)
}

/// Strip the leading download/English boilerplate.
///
/// Returns the cleaned text and the number of removed lines (blank lines
/// included). Idempotent: running it on its own output removes nothing.
/// A document consisting solely of noise degenerates to an empty string;
/// the content sufficiency filter deals with that case downstream.
pub fn strip_noise_header(text: &str) -> (String, usize) {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut head = 0;
    let mut removed = 0;
    let mut state = State::Seeking;

    loop {
        match state {
            State::Seeking => {
                while head < lines.len() && lines[head].trim().is_empty() {
                    head += 1;
                    removed += 1;
                }
                if head >= lines.len() {
                    state = State::Done;
                } else if is_download_line(lines[head]) {
                    head += 1;
                    removed += 1;
                    state = State::FoundMarker;
                } else if is_english_line(lines[head]) {
                    // rare: file starts with a bare "English" line
                    head += 1;
                    removed += 1;
                } else {
                    state = State::Done;
                }
            }
            State::FoundMarker => {
                while head < lines.len() && lines[head].trim().is_empty() {
                    head += 1;
                    removed += 1;
                }
                if head < lines.len()
                    && (is_english_line(lines[head]) || is_download_line(lines[head]))
                {
                    head += 1;
                    removed += 1;
                }
                state = State::Seeking;
            }
            State::Done => break,
        }
    }

    (lines[head..].join("\n").trim().to_string(), removed)
}

/// [Transform] wrapper around [strip_noise_header].
#[derive(Debug, Default)]
pub struct StripNoiseHeader;

impl Transform for StripNoiseHeader {
    fn transform_own(&self, mut doc: Document) -> Document {
        let (cleaned, _) = strip_noise_header(doc.content());
        doc.set_content(cleaned);
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::strip_noise_header;

    #[test]
    fn marker_alone() {
        let (cleaned, removed) = strip_noise_header("تحميل\nنص المرسوم");
        assert_eq!(cleaned, "نص المرسوم");
        assert_eq!(removed, 1);
    }

    #[test]
    fn marker_then_english() {
        let (cleaned, removed) = strip_noise_header("تحميل\nEnglish\n\nنص المرسوم");
        assert_eq!(cleaned, "نص المرسوم");
        assert_eq!(removed, 3);
    }

    #[test]
    fn marker_then_marker() {
        let (cleaned, removed) = strip_noise_header("تحميل\nتحميل\nنص");
        assert_eq!(cleaned, "نص");
        assert_eq!(removed, 2);
    }

    #[test]
    fn repeated_widgets() {
        let (cleaned, _) = strip_noise_header("\nتحميل\nEnglish\nتحميل\n\nتحميل\nنص");
        assert_eq!(cleaned, "نص");
    }

    #[test]
    fn bare_english_line() {
        let (cleaned, removed) = strip_noise_header("English\nنص");
        assert_eq!(cleaned, "نص");
        assert_eq!(removed, 1);
    }

    #[test]
    fn english_case_insensitive() {
        let (cleaned, _) = strip_noise_header("تحميل\nENGLISH\nنص");
        assert_eq!(cleaned, "نص");
    }

    #[test]
    fn body_occurrences_kept() {
        let text = "نص أول\nتحميل\nنص ثان";
        let (cleaned, removed) = strip_noise_header(text);
        assert_eq!(cleaned, text);
        assert_eq!(removed, 0);
    }

    #[test]
    fn all_noise_degenerates_to_empty() {
        let (cleaned, removed) = strip_noise_header("تحميل\nEnglish\n\nتحميل");
        assert_eq!(cleaned, "");
        assert_eq!(removed, 4);
    }

    #[test]
    fn idempotent() {
        let (once, _) = strip_noise_header("\n\nتحميل\n\nEnglish\nالنص الفعلي\nتحميل");
        let (twice, removed) = strip_noise_header(&once);
        assert_eq!(once, twice);
        assert_eq!(removed, 0);
    }
}
