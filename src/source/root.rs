//! ROOT file backend built on `oxyroot`
//!
//! Branches are decoded into `f64` sub-values whatever their stored type,
//! matching how a leaf value is read back as a double. Scalars yield one
//! sub-value per entry; C arrays (`float[n]`) and `std::vector` yield one
//! per element.

use crate::error::{ExtractError, Result};
use crate::source::{TreeReader, TreeSource};
use crate::types::Event;
use anyhow::{anyhow, Context};
use log::debug;
use oxyroot::{ReaderTree, RootFile, Slice};
use std::path::{Path, PathBuf};

type Column<'a> = Box<dyn Iterator<Item = Vec<f64>> + 'a>;

/// Opened ROOT file
pub struct RootSource {
    path: PathBuf,
    file: RootFile,
}

impl RootSource {
    /// Open a ROOT file, `ExtractError::SourceOpen` if it is missing or
    /// cannot be parsed as a ROOT container
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ExtractError::SourceOpen {
                path: path.to_path_buf(),
                reason: "file does not exist".to_string(),
            });
        }

        let file = RootFile::open(path).map_err(|e| ExtractError::SourceOpen {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }
}

impl TreeSource for RootSource {
    type Tree = RootTree;

    fn tree(&mut self, name: &str) -> Result<RootTree> {
        match self.file.get_tree(name) {
            Ok(tree) => Ok(RootTree {
                name: name.to_string(),
                tree,
            }),
            Err(e) => {
                debug!("get_tree({}) failed: {}", name, e);
                Err(ExtractError::TreeNotFound {
                    tree: name.to_string(),
                    path: self.path.clone(),
                })
            }
        }
    }
}

/// Tree read from a ROOT file
pub struct RootTree {
    name: String,
    tree: ReaderTree,
}

impl TreeReader for RootTree {
    fn name(&self) -> &str {
        &self.name
    }

    fn entries(&self) -> usize {
        usize::try_from(self.tree.entries()).unwrap_or(0)
    }

    fn has_leaf(&self, leaf: &str) -> bool {
        self.tree.branch(leaf).is_some()
    }

    fn for_each_event(
        &self,
        leaves: &[&str],
        visit: &mut dyn FnMut(&Event) -> Result<()>,
    ) -> Result<()> {
        let mut columns = Vec::with_capacity(leaves.len());
        for &leaf in leaves {
            if !self.has_leaf(leaf) {
                return Err(ExtractError::MissingLeaf(leaf.to_string()));
            }
            let column = open_column(&self.tree, leaf)
                .with_context(|| format!("cannot read branch {}", leaf))?;
            columns.push((leaf, column));
        }

        for entry in 0..self.entries() {
            let mut event = Event::new(entry);
            for (leaf, column) in columns.iter_mut() {
                let values = column.next().ok_or_else(|| {
                    ExtractError::Read(format!("branch {} ended before entry {}", leaf, entry))
                })?;
                event.insert(*leaf, values);
            }
            visit(&event)?;
        }
        Ok(())
    }
}

/// Kind of per-entry storage of a branch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Scalar,
    Array,
    Vector,
}

/// Split a branch type name into its element type and shape
///
/// `"float"` is a scalar, `"float[3]"` or `"float[nmir]"` an array,
/// `"vector<float>"` a vector.
fn split_type_name(type_name: &str) -> (&str, Shape) {
    let type_name = type_name.trim();
    if let Some(inner) = type_name
        .strip_prefix("vector<")
        .or_else(|| type_name.strip_prefix("std::vector<"))
        .and_then(|rest| rest.strip_suffix('>'))
    {
        return (inner.trim(), Shape::Vector);
    }
    if let Some(pos) = type_name.find('[') {
        return (type_name[..pos].trim(), Shape::Array);
    }
    (type_name, Shape::Scalar)
}

macro_rules! column {
    ($branch:expr, $shape:expr, $t:ty) => {
        match $shape {
            Shape::Scalar => Box::new(
                $branch
                    .as_iter::<$t>()
                    .map_err(|e| anyhow!("{}", e))?
                    .map(|v| vec![v as f64]),
            ) as Column<'a>,
            Shape::Array => Box::new(
                $branch
                    .as_iter::<Slice<$t>>()
                    .map_err(|e| anyhow!("{}", e))?
                    .map(|v| v.into_vec().into_iter().map(|x| x as f64).collect()),
            ) as Column<'a>,
            Shape::Vector => Box::new(
                $branch
                    .as_iter::<Vec<$t>>()
                    .map_err(|e| anyhow!("{}", e))?
                    .map(|v| v.into_iter().map(|x| x as f64).collect()),
            ) as Column<'a>,
        }
    };
}

/// Element types a column can be decoded from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Element {
    F64,
    F32,
    I32,
    U32,
    I16,
    I64,
    Bool,
}

/// Element type behind a type name, `None` if it cannot be decoded.
/// `Double32_t` and `Float16_t` are stored truncated on disk and are not
/// read.
fn element_type(name: &str) -> Option<Element> {
    match name {
        "double" | "Double_t" => Some(Element::F64),
        "float" | "Float_t" => Some(Element::F32),
        "int" | "int32_t" | "Int_t" => Some(Element::I32),
        "unsigned int" | "uint32_t" | "UInt_t" => Some(Element::U32),
        "short" | "int16_t" | "Short_t" => Some(Element::I16),
        "long" | "long long" | "int64_t" | "Long64_t" | "Long_t" => Some(Element::I64),
        "bool" | "Bool_t" => Some(Element::Bool),
        _ => None,
    }
}

fn open_column<'a>(tree: &'a ReaderTree, leaf: &str) -> anyhow::Result<Column<'a>> {
    let branch = tree
        .branch(leaf)
        .ok_or_else(|| anyhow!("no branch named {}", leaf))?;
    let type_name = branch.item_type_name();
    let (element, shape) = split_type_name(&type_name);

    let column = match element_type(element) {
        Some(Element::F64) => column!(branch, shape, f64),
        Some(Element::F32) => column!(branch, shape, f32),
        Some(Element::I32) => column!(branch, shape, i32),
        Some(Element::U32) => column!(branch, shape, u32),
        Some(Element::I16) => column!(branch, shape, i16),
        Some(Element::I64) => column!(branch, shape, i64),
        Some(Element::Bool) if shape == Shape::Scalar => Box::new(
            branch
                .as_iter::<bool>()
                .map_err(|e| anyhow!("{}", e))?
                .map(|v| vec![if v { 1.0 } else { 0.0 }]),
        ) as Column<'a>,
        _ => return Err(anyhow!("unsupported branch type {:?}", type_name)),
    };
    Ok(column)
}
