//! Paragraph-aware chunking with overlap.
//!
//! Chunk sizes are counted in unicode codepoints, which is what "character
//! budget" means everywhere in this crate.
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n\s*\n").unwrap();
}

/// Splits text into chunks of at most `max_chars` codepoints, preferring
/// blank-line paragraph boundaries and carrying `overlap` trailing
/// codepoints from one chunk into the next.
///
/// Overlap at paragraph boundaries is best-effort: the carried tail is
/// re-trimmed together with the next paragraph, so consecutive chunks
/// share *at most* `overlap` codepoints there. Only the hard-split
/// fallback (a single paragraph longer than the budget) guarantees the
/// exact overlap. This asymmetry is deliberate and pinned by tests.
#[derive(Debug, Clone)]
pub struct ParagraphChunker {
    max_chars: usize,
    overlap: usize,
}

impl ParagraphChunker {
    pub fn new(max_chars: usize, overlap: usize) -> Self {
        Self { max_chars, overlap }
    }

    /// Chunk a single text span. Deterministic; empty chunks are dropped.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let paragraphs: Vec<&str> = PARAGRAPH_BREAK
            .split(text)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        let mut chunks: Vec<String> = Vec::new();
        let mut buf = String::new();

        for paragraph in paragraphs {
            if buf.is_empty() {
                buf = paragraph.to_string();
                continue;
            }

            if buf.chars().count() + paragraph.chars().count() + 2 <= self.max_chars {
                buf.push_str("\n\n");
                buf.push_str(paragraph);
            } else {
                let tail = self.overlap_tail(&buf);
                chunks.push(buf);
                buf = format!("{}\n\n{}", tail, paragraph).trim().to_string();
            }
        }
        if !buf.is_empty() {
            chunks.push(buf);
        }

        // A single paragraph can exceed the budget on its own; those
        // chunks get hard-split into fixed-size windows.
        chunks
            .into_iter()
            .flat_map(|c| {
                if c.chars().count() <= self.max_chars {
                    vec![c]
                } else {
                    self.hard_split(&c)
                }
            })
            .filter(|c| !c.is_empty())
            .collect()
    }

    /// Chunk article spans independently, concatenating in article order.
    /// Spans within the budget are emitted whole.
    pub fn chunk_spans(&self, spans: &[String]) -> Vec<String> {
        let mut out = Vec::new();
        for span in spans {
            if span.chars().count() <= self.max_chars {
                out.push(span.clone());
            } else {
                out.extend(self.chunk(span));
            }
        }
        out
    }

    /// Last `overlap` codepoints of a chunk, empty when overlap is 0.
    fn overlap_tail(&self, chunk: &str) -> String {
        if self.overlap == 0 {
            return String::new();
        }
        let chars: Vec<char> = chunk.chars().collect();
        chars[chars.len().saturating_sub(self.overlap)..]
            .iter()
            .collect()
    }

    /// Fixed-size windows of exactly `max_chars`, each next window starting
    /// `max_chars - overlap` codepoints further. When overlap >= max_chars
    /// the step back is clamped to zero so the scan always advances past
    /// the previous window's end.
    fn hard_split(&self, chunk: &str) -> Vec<String> {
        let chars: Vec<char> = chunk.chars().collect();
        let step_back = if self.overlap < self.max_chars {
            self.overlap
        } else {
            0
        };

        let mut windows = Vec::new();
        let mut start = 0;
        while start < chars.len() {
            let end = usize::min(start + self.max_chars, chars.len());
            let window: String = chars[start..end].iter().collect();
            let window = window.trim().to_string();
            if !window.is_empty() {
                windows.push(window);
            }
            if end >= chars.len() {
                break;
            }
            start = end - step_back;
        }
        windows
    }
}
