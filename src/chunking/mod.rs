/*! Text chunking.

Turns a document into bounded-size training chunks:
article-aware segmentation when the structure is there
([article::split_by_articles]), paragraph-aware accumulation with overlap
and a hard-split fallback ([paragraph::ParagraphChunker]), and per-document
capping ([cap::cap_chunks]) so mega-documents do not dominate the dataset.
!*/
mod article;
mod cap;
mod paragraph;

pub use article::split_by_articles;
pub use cap::cap_chunks;
pub use paragraph::ParagraphChunker;
