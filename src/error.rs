use std::fmt;
use std::path::PathBuf;

/// Custom error types for tree extraction
#[derive(Debug)]
pub enum ExtractError {
    /// Input file missing, unreadable or not a usable ROOT container
    SourceOpen { path: PathBuf, reason: String },
    /// Named tree absent from the opened file
    TreeNotFound { tree: String, path: PathBuf },
    /// Requested leaf absent from the tree
    MissingLeaf(String),
    /// Sub-value index outside the leaf's values for an event
    IndexOutOfRange {
        leaf: String,
        entry: usize,
        index: usize,
        len: usize,
    },
    /// Index leaf holds a value that cannot select a sub-value
    InvalidIndex { entry: usize, value: f64 },
    /// Branch could not be decoded by the reader backend
    Read(String),
    /// I/O errors
    Io(std::io::Error),
    /// CSV writer errors
    Csv(csv::Error),
}

impl ExtractError {
    /// Failures reported to the user without aborting the process
    pub fn is_reported(&self) -> bool {
        matches!(
            self,
            ExtractError::SourceOpen { .. } | ExtractError::TreeNotFound { .. }
        )
    }
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::SourceOpen { path, reason } => {
                write!(f, "Cannot open ROOT file {}: {}", path.display(), reason)
            }
            ExtractError::TreeNotFound { tree, path } => write!(
                f,
                "Cannot find tree {} in the ROOT file {}",
                tree,
                path.display()
            ),
            ExtractError::MissingLeaf(name) => write!(
                f,
                "Leaf not found in tree: {} (no branch of that name; leaves inside a multi-leaf branch cannot be read)",
                name
            ),
            ExtractError::IndexOutOfRange {
                leaf,
                entry,
                index,
                len,
            } => write!(
                f,
                "Index {} out of range for leaf {} in event {} ({} values)",
                index, leaf, entry, len
            ),
            ExtractError::InvalidIndex { entry, value } => {
                write!(f, "Invalid index value {} in event {}", value, entry)
            }
            ExtractError::Read(msg) => write!(f, "Read error: {}", msg),
            ExtractError::Io(err) => write!(f, "I/O error: {}", err),
            ExtractError::Csv(err) => write!(f, "CSV error: {}", err),
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractError::Io(err) => Some(err),
            ExtractError::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        ExtractError::Io(err)
    }
}

impl From<csv::Error> for ExtractError {
    fn from(err: csv::Error) -> Self {
        ExtractError::Csv(err)
    }
}

impl From<anyhow::Error> for ExtractError {
    fn from(err: anyhow::Error) -> Self {
        ExtractError::Read(format!("{:#}", err))
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
