//! Building trees from nested values.
//!
//! Mapping keys become child nodes. A scalar value becomes a leaf child
//! named by its text, and a null value adds nothing, so
//! `{windows: {calc.exe: null}}` is the tree `windows/calc.exe`. Scalars
//! inside a sequence become leaves named by their text, while nested
//! containers inside a sequence become children named by their index.
//!
//! # Example
//!
//! ```
//! use treequery::document::parser::parse_yaml;
//!
//! let tree = parse_yaml("windows:\n  system32:\n    calc.exe: ~\n").unwrap();
//! assert!(tree.find_path("/windows/system32/calc.exe").is_some());
//! ```

use anyhow::{Context, Result};

use super::node::Primitive;
use super::tree::{NodeId, Tree};

/// Parses YAML text into a tree with an anonymous root.
pub fn parse_yaml(content: &str) -> Result<Tree> {
    let value: Primitive = serde_yaml::from_str(content).context("Failed to parse YAML")?;
    Ok(Tree::from_primitive(&value))
}

/// Parses JSON text into a tree with an anonymous root.
pub fn parse_json(content: &str) -> Result<Tree> {
    let value: Primitive = serde_json::from_str(content).context("Failed to parse JSON")?;
    Ok(Tree::from_primitive(&value))
}

impl Tree {
    /// Builds a tree from a nested value, under an anonymous root.
    pub fn from_primitive(value: &Primitive) -> Tree {
        let mut tree = Tree::new("");
        let root = tree.root_id();
        add_value(&mut tree, root, value);
        tree
    }
}

/// Adds the contents of `value` as children of `parent`.
fn add_value(tree: &mut Tree, parent: NodeId, value: &Primitive) {
    match value {
        Primitive::Null => {}
        Primitive::Mapping(entries) => {
            for (key, child) in entries {
                let id = tree.add_child(parent, key);
                add_value(tree, id, child);
            }
        }
        Primitive::Sequence(items) => {
            for (index, item) in items.iter().enumerate() {
                if item.is_container() {
                    let id = tree.add_child(parent, &index.to_string());
                    add_value(tree, id, item);
                } else {
                    add_value(tree, parent, item);
                }
            }
        }
        scalar => {
            if let Some(text) = scalar.scalar_text() {
                tree.add_child(parent, &text);
            }
        }
    }
}
