//! FileModel manifest loading.
//!
//! The extractor writes its facts as a JSON array of FileModel records;
//! this module is the boundary where that array enters the checker. Order
//! is preserved: the manifest sequence is the evaluation input sequence.

use std::path::Path;

use crate::error::{Error, Result};
use crate::model::FileModel;

/// Load a manifest from a file path.
pub fn load(path: &Path) -> Result<Vec<FileModel>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse manifest JSON.
pub fn parse(content: &str, path: &Path) -> Result<Vec<FileModel>> {
    serde_json::from_str(content).map_err(|e| Error::Manifest {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
