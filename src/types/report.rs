use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of an extraction run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExtractReport {
    /// Written CSV file, `None` when extracting into an arbitrary writer
    pub csv_path: Option<PathBuf>,
    pub total_events: usize,
    pub written_rows: usize,
    /// Events dropped because a requested field held NaN
    pub rejected_events: usize,
}

impl ExtractReport {
    /// Fraction of events written, 0.0 for an empty tree
    pub fn acceptance(&self) -> f64 {
        if self.total_events == 0 {
            return 0.0;
        }
        self.written_rows as f64 / self.total_events as f64
    }
}
