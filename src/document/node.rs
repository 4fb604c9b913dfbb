//! Node abstractions consumed by queries.
//!
//! Queries never depend on a concrete tree type. Anything that can report a
//! name, a parent and its children, and that can be compared and hashed by
//! identity, implements [`TreeNode`] and can be searched.
//!
//! # Example
//!
//! ```
//! use treequery::document::node::TreeNode;
//! use treequery::document::tree::Tree;
//!
//! let mut tree = Tree::new("");
//! let windows = tree.add_child(tree.root_id(), "windows");
//! let calc = tree.add_child(windows, "calc.exe");
//!
//! let node = tree.node(calc).unwrap();
//! assert_eq!(node.path_segments(), vec!["windows", "calc.exe"]);
//! assert_eq!(node.path(), "/windows/calc.exe");
//! ```

use std::collections::HashSet;
use std::hash::Hash;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A node in a tree-shaped structure.
///
/// Implementations are usually cheap handles (references or ids), since the
/// traversal clones them into its queue and visited set.
pub trait TreeNode: Clone + Eq + Hash {
    /// The node's own name, one path segment.
    fn name(&self) -> String;

    /// The node's parent, or `None` for a root.
    fn parent(&self) -> Option<Self>;

    /// The node's children, in order. May be empty.
    fn children(&self) -> Vec<Self>;

    /// Names from the root down to this node.
    ///
    /// Empty names (such as an anonymous root) are skipped. Walking stops
    /// if the parent links loop back on themselves.
    fn path_segments(&self) -> Vec<String> {
        let mut segments = Vec::new();
        let mut seen = HashSet::new();
        let mut current = Some(self.clone());

        while let Some(node) = current {
            if !seen.insert(node.clone()) {
                break;
            }
            let name = node.name();
            if !name.is_empty() {
                segments.push(name);
            }
            current = node.parent();
        }

        segments.reverse();
        segments
    }

    /// The `/`-joined path of this node, starting with `/`.
    fn path(&self) -> String {
        format!("/{}", self.path_segments().join("/"))
    }
}

/// A plain nested value that can be turned into a tree.
///
/// Deserializes from any self-describing format (YAML, JSON, TOML), keeping
/// mapping keys in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Primitive {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<Primitive>),
    Mapping(IndexMap<String, Primitive>),
}

impl Primitive {
    /// Returns the text of a scalar value, or `None` for null and containers.
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            Primitive::Bool(b) => Some(b.to_string()),
            Primitive::Integer(i) => Some(i.to_string()),
            Primitive::Float(f) => Some(f.to_string()),
            Primitive::String(s) => Some(s.clone()),
            Primitive::Null | Primitive::Sequence(_) | Primitive::Mapping(_) => None,
        }
    }

    /// Returns true for sequences and mappings.
    pub fn is_container(&self) -> bool {
        matches!(self, Primitive::Sequence(_) | Primitive::Mapping(_))
    }
}
