//! CPT dataset preparation pipeline.
#[allow(clippy::module_inception)]
mod pipeline;
pub mod types;

pub use pipeline::{PrepareConfig, PrepareCpt};
