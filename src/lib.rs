pub mod assembling;
pub mod categories;
pub mod chunking;
pub mod error;
pub mod filtering;
pub mod io;
pub mod pipelines;
pub mod stats;
pub mod transformers;
