//! tree2csv Library
//!
//! Extracts reconstructed fluorescence-detector events from a ROOT tree
//! into a CSV file, one row per event.
//!
//! # Features
//!
//! - **`root`** (default): Read ROOT files through `oxyroot`
//! - **`cli`** (default): Build the command-line interface binary
//! - **`serde`**: Enable serialization/deserialization of types
//!
//! # Quick Start
//!
//! Extract the default field list from the `mdps5` tree:
//! ```rust,no_run
//! use tree2csv::{extract, ExtractOptions};
//! use std::path::Path;
//!
//! let options = ExtractOptions::default();
//! let report = extract(Path::new("run.root"), Path::new("run.csv"), &options).unwrap();
//! println!("Wrote {} of {} events", report.written_rows, report.total_events);
//! ```
//!
//! Extract from an in-memory tree into any writer:
//! ```rust
//! use tree2csv::{extract_tree, MemoryTree};
//!
//! let tree = MemoryTree::new("mdps5")
//!     .with_scalar_leaf("iminc", vec![1.0])
//!     .with_leaf("xcore", vec![vec![0.5, 1.5]])
//!     .with_leaf("mir_id", vec![vec![7.0, 8.0]]);
//! let mut csv = Vec::new();
//! extract_tree(&tree, &mut csv, &["xcore", "mir_id"]).unwrap();
//! assert_eq!(csv, b"xcore,mir_id\n1.5,7.0\n");
//! ```
//!
//! # Row selection
//!
//! For every event the `iminc` leaf selects which sub-value of each field
//! is written; the per-mirror fields `mir_id`, `mir_nmir` and `mir_ngtube`
//! are always read at sub-value 0 (see [`index`]). An event with a NaN in
//! any requested field is dropped.

pub mod conversion;
pub mod error;
pub mod export;
pub mod extract;
pub mod fields;
pub mod filters;
pub mod index;
pub mod source;
pub mod types;

pub use conversion::*;
pub use error::*;
pub use export::*;
pub use extract::*;
pub use fields::*;
pub use filters::*;
pub use index::*;
pub use source::*;
pub use types::*;
