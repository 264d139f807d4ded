//! Input data sources
//!
//! A [`TreeSource`] is an opened input file that hands out trees by name; a
//! [`TreeReader`] walks the entries of one tree in order. The ROOT backend
//! is built with the `root` feature; [`MemoryTree`] serves library users and
//! tests.

pub mod memory;
#[cfg(feature = "root")]
pub mod root;

pub use memory::*;
#[cfg(feature = "root")]
pub use root::*;

use crate::error::Result;
use crate::types::Event;

/// One tree of an opened source
pub trait TreeReader {
    fn name(&self) -> &str;

    /// Number of entries in the tree
    fn entries(&self) -> usize;

    fn has_leaf(&self, leaf: &str) -> bool;

    /// Visit every entry in order, loading only `leaves`
    ///
    /// The event passed to `visit` is valid for that call only. An error
    /// returned by `visit` stops the traversal and is returned unchanged.
    fn for_each_event(
        &self,
        leaves: &[&str],
        visit: &mut dyn FnMut(&Event) -> Result<()>,
    ) -> Result<()>;
}

/// An opened input file
pub trait TreeSource {
    type Tree: TreeReader;

    /// Locate a tree by name, `ExtractError::TreeNotFound` when absent
    fn tree(&mut self, name: &str) -> Result<Self::Tree>;
}
