/*!
# IO utilities

Corpus traversal/reading and output sinks (JSONL datasets, mirrored
cleaned trees).
!*/
pub mod reader;
pub mod writer;

pub use reader::{find_text_files, infer_category, read_text_lossy, rel_posix};
pub use writer::JsonlWriter;
