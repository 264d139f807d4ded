//! CSV output for extracted events
//!
//! The header row holds the field names in configured order; every data
//! row holds the formatted values in the same order.

use crate::error::Result;
use crate::fields::{default_fields, DEFAULT_TREE_NAME};
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options for an extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExtractOptions {
    pub tree_name: String,
    /// Columns to write, in order
    pub fields: Vec<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            tree_name: DEFAULT_TREE_NAME.to_string(),
            fields: default_fields(),
        }
    }
}

/// Row writer over any byte sink
pub struct CsvExporter<W: Write> {
    writer: csv::Writer<W>,
    columns: usize,
}

impl<W: Write> CsvExporter<W> {
    /// Wrap `sink` and write the header row
    pub fn new<S: AsRef<str>>(sink: W, fields: &[S]) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(sink);
        writer.write_record(fields.iter().map(|f| f.as_ref()))?;
        Ok(Self {
            writer,
            columns: fields.len(),
        })
    }

    pub fn write_row(&mut self, values: &[String]) -> Result<()> {
        debug_assert_eq!(values.len(), self.columns);
        self.writer.write_record(values)?;
        Ok(())
    }

    /// Flush buffered rows to the sink
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Create (or truncate) the output file, creating missing parent directories
pub fn create_output_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(File::create(path)?)
}
