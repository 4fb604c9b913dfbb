//! Tree documents that queries run against.
//!
//! [`node::TreeNode`] is the interface queries consume. [`tree::Tree`] is a
//! ready-made implementation, and [`parser`] builds one from YAML, JSON or
//! any other nested value.

pub mod node;
pub mod parser;
pub mod tree;
