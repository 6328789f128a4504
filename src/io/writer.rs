//! Output sinks.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::assembling::Record;
use crate::error::Error;

/// Line-delimited JSON record writer.
pub struct JsonlWriter {
    handle: BufWriter<File>,
}

impl JsonlWriter {
    /// Create (truncate) the destination file, parents included.
    pub fn create(path: &Path) -> Result<Self, Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Self {
            handle: BufWriter::new(File::create(path)?),
        })
    }

    /// Serialize one record per line.
    pub fn write(&mut self, record: &Record) -> Result<(), Error> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');
        self.handle.write_all(line.as_bytes())?;
        Ok(())
    }

    pub fn write_all(&mut self, records: &[Record]) -> Result<(), Error> {
        for record in records {
            self.write(record)?;
        }
        self.flush()
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        Ok(self.handle.flush()?)
    }
}

/// Write `text` under `root/rel`, creating parent directories, with the
/// trailing newline the cleaned corpus convention expects.
pub fn write_mirrored(root: &Path, rel: &Path, text: &str) -> Result<(), Error> {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut content = text.to_string();
    content.push('\n');
    std::fs::write(path, content)?;
    Ok(())
}
