//! TreeQuery - glob, regex and grep style path queries over arbitrary trees.
//!
//! A [`Query`] is compiled once from a `/`-separated string and can then
//! test single paths or search any tree whose nodes implement
//! [`TreeNode`](document::node::TreeNode).
//!
//! ```
//! use treequery::document::parser::parse_yaml;
//! use treequery::document::node::TreeNode;
//! use treequery::Query;
//!
//! let tree = parse_yaml("windows:\n  foo:\n    bar:\n      calc.exe: ~\n").unwrap();
//! let query = Query::regex("windows/**/calc.exe").unwrap();
//! let found: Vec<String> = query.find(tree.root()).map(|n| n.path()).collect();
//! assert_eq!(found, vec!["/windows/foo/bar/calc.exe"]);
//! ```

pub mod config;
pub mod document;
pub mod file;
pub mod query;

pub use query::{Dialect, Query, QueryError};
