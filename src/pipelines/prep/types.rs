//! Document and chunk types.
use crate::categories::Categories;

/// One corpus file in flight: category code, path relative to the corpus
/// root and the (progressively normalized) text. Created on read,
/// discarded after its chunks are emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    category: String,
    rel_path: String,
    content: String,
}

impl Document {
    pub fn new(category: String, rel_path: String, content: String) -> Self {
        Self {
            category,
            rel_path,
            content,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn rel_path(&self) -> &str {
        &self.rel_path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }
}

/// A bounded slice of a document's text. `index` is 1-based, `total` is
/// the number of chunks the document produced after capping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    body: String,
    index: usize,
    total: usize,
}

impl Chunk {
    pub fn new(body: String, index: usize, total: usize) -> Self {
        Self { body, index, total }
    }

    /// Final record text: the optional Arabic metadata header, then the
    /// body-follows marker, then the body.
    pub fn render(&self, doc: &Document, categories: &Categories, include_header: bool) -> String {
        if !include_header {
            return self.body.clone();
        }
        format!(
            "[نوع_المستند]: {}\n[المصدر]: qanoon.om\n[المسار]: {}\n[الجزء]: {}/{}\nالنص:\n{}",
            categories.label(doc.category()),
            doc.rel_path(),
            self.index,
            self.total,
            self.body
        )
    }
}
