use crate::error::{ExtractError, Result};
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Leaf values of one tree entry
///
/// Each leaf holds the sub-values stored for this entry; scalar leaves hold
/// exactly one.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Event {
    pub entry: usize,
    pub leaves: HashMap<String, Vec<f64>>,
}

impl Event {
    pub fn new(entry: usize) -> Self {
        Self {
            entry,
            leaves: HashMap::new(),
        }
    }

    pub fn insert(&mut self, leaf: &str, values: Vec<f64>) {
        self.leaves.insert(leaf.to_string(), values);
    }

    pub fn with_leaf(mut self, leaf: &str, values: Vec<f64>) -> Self {
        self.insert(leaf, values);
        self
    }

    /// All sub-values of a leaf
    pub fn leaf(&self, leaf: &str) -> Result<&[f64]> {
        self.leaves
            .get(leaf)
            .map(Vec::as_slice)
            .ok_or_else(|| ExtractError::MissingLeaf(leaf.to_string()))
    }

    /// Sub-value `index` of a leaf
    pub fn value(&self, leaf: &str, index: usize) -> Result<f64> {
        let values = self.leaf(leaf)?;
        values
            .get(index)
            .copied()
            .ok_or_else(|| ExtractError::IndexOutOfRange {
                leaf: leaf.to_string(),
                entry: self.entry,
                index,
                len: values.len(),
            })
    }
}
