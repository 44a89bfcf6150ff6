//! Configuration parsing and validation.
//!
//! Handles gauge.toml parsing with version validation and unknown key
//! warnings. The recognized surface is deliberately small: a version field
//! and a `[rules]` table with disables, severity overrides, and numeric
//! threshold overrides.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::rule::Severity;

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Config file name searched for next to the manifest and in the cwd.
pub const CONFIG_FILE_NAME: &str = "gauge.toml";

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "rules"];

/// Known keys under `[rules]`.
const KNOWN_RULE_KEYS: &[&str] = &["disabled", "severity", "thresholds"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    #[allow(dead_code)]
    version: i64,

    #[serde(default)]
    rules: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Rule catalog options.
    #[serde(default)]
    pub rules: RuleOptions,
}

/// Startup options for the rule registry.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RuleOptions {
    /// Rule ids to skip.
    #[serde(default)]
    pub disabled: Vec<String>,

    /// Per-rule severity overrides.
    #[serde(default)]
    pub severity: BTreeMap<String, Severity>,

    /// Per-rule numeric limit overrides.
    #[serde(default)]
    pub thresholds: BTreeMap<String, i64>,
}

/// Locate a config file for the given directory, if one exists.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let candidate = dir.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    // First check version
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    // Surface unknown keys before strict parsing
    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    if let Some(toml::Value::Table(rules)) = &flexible.rules {
        for key in rules.keys() {
            if !KNOWN_RULE_KEYS.contains(&key.as_str()) {
                warn_unknown_key(path, &format!("rules.{}", key));
            }
        }
    }

    // Parse full config
    toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "gauge: warning: unknown config key '{}' in {}",
        key,
        path.display()
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
