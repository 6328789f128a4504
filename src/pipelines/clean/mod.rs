//! Corpus cleaning pre-pass.
#[allow(clippy::module_inception)]
mod pipeline;

pub use pipeline::{CleanConfig, CleanCorpus};
