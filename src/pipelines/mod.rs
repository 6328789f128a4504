//! Pipelines.
//!
//! The two runnable pipelines are implemented here, and the module
//! provides a light [pipeline::Pipeline] trait that enables easy and
//! flexible pipeline creation.
pub mod clean;
#[allow(clippy::module_inception)]
pub mod pipeline;
pub mod prep;

pub use clean::CleanCorpus;
pub use pipeline::Pipeline;
pub use prep::PrepareCpt;
