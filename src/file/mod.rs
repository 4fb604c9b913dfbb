//! File I/O operations for tree documents.
//!
//! This module provides functionality to load YAML or JSON documents from
//! disk or stdin as searchable trees.

pub mod loader;
