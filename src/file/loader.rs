//! Tree file loading functionality.
//!
//! This module provides functions to load YAML or JSON documents from files
//! or stdin, building `Tree` structures that queries can search.

use crate::document::parser::{parse_json, parse_yaml};
use crate::document::tree::Tree;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Loads a YAML or JSON file from the filesystem and builds a tree.
///
/// Files ending in `.gz` are decompressed first. The format is taken from
/// the name before any `.gz` suffix: `.json` is parsed as JSON, anything
/// else as YAML.
///
/// # Examples
///
/// ```no_run
/// use treequery::file::loader::load_tree_file;
///
/// let tree = load_tree_file("inventory.yaml").unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist or cannot be read
/// - A `.gz` file is not valid gzip
/// - The contents are not valid YAML or JSON
pub fn load_tree_file<P: AsRef<Path>>(path: P) -> Result<Tree> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };

    let parsed = if is_json_file(path_ref) {
        parse_json(&content)
    } else {
        parse_yaml(&content)
    };
    let tree =
        parsed.with_context(|| format!("Failed to load tree from {}", path_ref.display()))?;

    debug!("loaded {} nodes from {}", tree.len(), path_ref.display());
    Ok(tree)
}

/// Loads a YAML or JSON document from standard input.
///
/// Gzip input is detected by its magic bytes. JSON is tried first, then
/// YAML.
pub fn load_tree_from_stdin() -> Result<Tree> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    load_tree_from_bytes(&buffer).context("Failed to load tree from stdin")
}

/// Builds a tree from raw document bytes, which may be gzip-compressed.
pub fn load_tree_from_bytes(bytes: &[u8]) -> Result<Tree> {
    // Check for gzip magic bytes (0x1f 0x8b)
    let content = if bytes.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(bytes)?
    } else {
        String::from_utf8(bytes.to_vec()).context("Invalid UTF-8 in input")?
    };

    if let Ok(tree) = parse_json(&content) {
        return Ok(tree);
    }
    parse_yaml(&content).context("Input is neither valid JSON nor valid YAML")
}

/// Determines if a file is JSON based on its name.
///
/// Examples:
/// - `data.json` → true
/// - `data.json.gz` → true
/// - `data.yaml.gz` → false
fn is_json_file<P: AsRef<Path>>(path: P) -> bool {
    let path_str = path.as_ref().to_string_lossy();
    let base = path_str.strip_suffix(".gz").unwrap_or(&*path_str);
    base.ends_with(".json")
}

fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped input")?;
    Ok(content)
}
