//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the cli crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::model::{FileKind, FileModel, ImportEntry, ImportGroup};

/// A well-formed model that violates no built-in rule.
pub fn clean_model(path: &str, kind: FileKind) -> FileModel {
    FileModel {
        path: path.to_string(),
        kind,
        line_count: 50,
        declared_props: Vec::new(),
        jsx_max_depth: 0,
        import_entries: Vec::new(),
        uses_mutable_binding: false,
        uses_loose_equality: false,
        has_explicit_return_types: true,
        uses_any_type: false,
        is_test_file: kind == FileKind::Test,
    }
}

/// A clean utility-kind model.
pub fn utility(path: &str) -> FileModel {
    clean_model(path, FileKind::Utility)
}

/// A clean component-kind model.
pub fn component(path: &str) -> FileModel {
    let mut model = clean_model(path, FileKind::Component);
    model.jsx_max_depth = 2;
    model
}

/// Build an import list from (group, module) pairs.
pub fn imports(entries: &[(ImportGroup, &str)]) -> Vec<ImportEntry> {
    entries
        .iter()
        .map(|(group, module)| ImportEntry::new(*group, *module))
        .collect()
}
