use crate::error::{ExtractError, Result};
use crate::source::{TreeReader, TreeSource};
use crate::types::Event;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Column-stored tree held in memory
///
/// Each leaf stores, per entry, the list of sub-values of that entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryTree {
    name: String,
    leaves: BTreeMap<String, Vec<Vec<f64>>>,
}

impl MemoryTree {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            leaves: BTreeMap::new(),
        }
    }

    /// Add a leaf with several sub-values per entry
    pub fn with_leaf(mut self, leaf: &str, values: Vec<Vec<f64>>) -> Self {
        self.leaves.insert(leaf.to_string(), values);
        self
    }

    /// Add a leaf with one value per entry
    pub fn with_scalar_leaf(self, leaf: &str, values: Vec<f64>) -> Self {
        let values = values.into_iter().map(|v| vec![v]).collect();
        self.with_leaf(leaf, values)
    }
}

impl TreeReader for MemoryTree {
    fn name(&self) -> &str {
        &self.name
    }

    fn entries(&self) -> usize {
        self.leaves.values().map(Vec::len).max().unwrap_or(0)
    }

    fn has_leaf(&self, leaf: &str) -> bool {
        self.leaves.contains_key(leaf)
    }

    fn for_each_event(
        &self,
        leaves: &[&str],
        visit: &mut dyn FnMut(&Event) -> Result<()>,
    ) -> Result<()> {
        let mut columns = Vec::with_capacity(leaves.len());
        for &leaf in leaves {
            let column = self
                .leaves
                .get(leaf)
                .ok_or_else(|| ExtractError::MissingLeaf(leaf.to_string()))?;
            columns.push((leaf, column));
        }

        for entry in 0..self.entries() {
            let mut event = Event::new(entry);
            for (leaf, column) in &columns {
                let values = column.get(entry).ok_or_else(|| {
                    ExtractError::Read(format!("leaf {} has no entry {}", leaf, entry))
                })?;
                event.insert(leaf, values.clone());
            }
            visit(&event)?;
        }
        Ok(())
    }
}

/// In-memory stand-in for an opened input file
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    path: PathBuf,
    trees: Vec<MemoryTree>,
}

impl MemorySource {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            trees: Vec::new(),
        }
    }

    pub fn with_tree(mut self, tree: MemoryTree) -> Self {
        self.trees.push(tree);
        self
    }
}

impl TreeSource for MemorySource {
    type Tree = MemoryTree;

    fn tree(&mut self, name: &str) -> Result<MemoryTree> {
        self.trees
            .iter()
            .find(|tree| tree.name == name)
            .cloned()
            .ok_or_else(|| ExtractError::TreeNotFound {
                tree: name.to_string(),
                path: self.path.clone(),
            })
    }
}
