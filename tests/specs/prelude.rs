//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the gauge binary
pub fn gauge_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("gauge"))
}

/// A temp project holding a manifest and optional config.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Create a project with the given manifest JSON.
    pub fn with_manifest(manifest: &str) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("models.json"), manifest).unwrap();
        Self { dir }
    }

    /// Add a gauge.toml next to the manifest.
    pub fn with_config(self, config: &str) -> Self {
        std::fs::write(self.dir.path().join("gauge.toml"), config).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn manifest(&self) -> PathBuf {
        self.dir.path().join("models.json")
    }

    /// Run `gauge check` on the project's manifest.
    pub fn check(&self) -> Command {
        let mut cmd = gauge_cmd();
        cmd.arg("check").arg(self.manifest()).current_dir(self.path());
        cmd
    }
}

/// Manifest with a single clean utility file.
pub const CLEAN_MANIFEST: &str = r#"[
  {
    "path": "src/util.ts",
    "kind": "utility",
    "line_count": 50
  }
]"#;

/// Manifest with an oversized component declaring too many props.
pub const NOISY_MANIFEST: &str = r#"[
  {
    "path": "src/Form.tsx",
    "kind": "component",
    "line_count": 120,
    "declared_props": ["a", "b", "c", "d", "e", "f"],
    "jsx_max_depth": 3
  }
]"#;
