//! Normalized per-file facts produced by the external extractor.
//!
//! A `FileModel` is the checker's entire view of a source file. Nothing in
//! this crate re-derives these facts from file contents; the extractor owns
//! lexing and measurement, the checker owns judgement.

use serde::{Deserialize, Serialize};

/// Structural role of a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Component,
    Hook,
    Utility,
    Type,
    Test,
}

impl FileKind {
    /// Lowercase name as it appears in manifests and messages.
    pub fn name(self) -> &'static str {
        match self {
            FileKind::Component => "component",
            FileKind::Hook => "hook",
            FileKind::Utility => "utility",
            FileKind::Type => "type",
            FileKind::Test => "test",
        }
    }
}

/// Import group, in required ordering rank.
///
/// Variant order is the canonical rank: builtins sort before external
/// packages, which sort before internal aliases, and so on down to index
/// imports. `Ord` on this enum is the ordering contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportGroup {
    Builtin,
    External,
    Internal,
    Parent,
    Sibling,
    Index,
}

impl ImportGroup {
    /// Lowercase name for messages.
    pub fn name(self) -> &'static str {
        match self {
            ImportGroup::Builtin => "builtin",
            ImportGroup::External => "external",
            ImportGroup::Internal => "internal",
            ImportGroup::Parent => "parent",
            ImportGroup::Sibling => "sibling",
            ImportGroup::Index => "index",
        }
    }
}

/// One import statement: its group and the module identifier as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportEntry {
    pub group: ImportGroup,
    pub module: String,
}

impl ImportEntry {
    pub fn new(group: ImportGroup, module: impl Into<String>) -> Self {
        Self {
            group,
            module: module.into(),
        }
    }
}

/// Normalized structural facts about one source file.
///
/// Counts are signed so that a malformed manifest (negative line count) can
/// be represented, diagnosed, and excluded instead of failing the whole
/// decode. See [`FileModel::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileModel {
    /// Project-relative path; unique key within one evaluation run.
    pub path: String,

    /// Structural role of the file.
    pub kind: FileKind,

    /// Total line count as measured by the extractor.
    #[serde(default)]
    pub line_count: i64,

    /// Declared prop names, in declaration order.
    #[serde(default)]
    pub declared_props: Vec<String>,

    /// Deepest JSX nesting level; 0 for non-components.
    #[serde(default)]
    pub jsx_max_depth: i64,

    /// Import statements in source order.
    #[serde(default)]
    pub import_entries: Vec<ImportEntry>,

    /// True if the file declares a reassignable local binding.
    #[serde(default)]
    pub uses_mutable_binding: bool,

    /// True if the file compares with loose equality.
    #[serde(default)]
    pub uses_loose_equality: bool,

    /// True if every exported function declares its return type.
    #[serde(default = "default_true")]
    pub has_explicit_return_types: bool,

    /// True if the file uses the unconstrained dynamic type.
    #[serde(default)]
    pub uses_any_type: bool,

    /// True for test files (relaxes type-discipline rules).
    #[serde(default)]
    pub is_test_file: bool,
}

fn default_true() -> bool {
    true
}

impl FileModel {
    /// Check data-model invariants.
    ///
    /// Returns a description of the first breach, or `Ok` for a well-formed
    /// model. Duplicate paths are a cross-model invariant and are checked by
    /// the evaluator, not here.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.path.is_empty() {
            return Err("path is empty".to_string());
        }
        if self.line_count < 0 {
            return Err(format!("line_count is negative ({})", self.line_count));
        }
        if self.jsx_max_depth < 0 {
            return Err(format!("jsx_max_depth is negative ({})", self.jsx_max_depth));
        }
        if self.jsx_max_depth > 0 && self.kind != FileKind::Component {
            return Err(format!(
                "jsx_max_depth is {} but kind is {}",
                self.jsx_max_depth,
                self.kind.name()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
