//! Rule registry: the ordered set of active rules.
//!
//! Insertion order is preserved and breaks ties in report ordering.
//! Disabling removes a rule from evaluation without deleting its
//! definition, so it can be re-enabled later.

use std::collections::BTreeSet;

use crate::config::RuleOptions;
use crate::error::{Error, Result};
use crate::rule::{RuleSpec, Severity};
use crate::rules;

/// Ordered id -> RuleSpec mapping with an enabled/disabled toggle per rule.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: Vec<RuleSpec>,
    disabled: BTreeSet<&'static str>,
}

impl RuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry populated with the built-in catalog.
    pub fn with_builtin_rules() -> Self {
        let mut registry = Self::new();
        for spec in rules::builtin_rules() {
            // Catalog ids are unique by construction.
            let _ = registry.register(spec);
        }
        registry
    }

    /// Register a rule. Fails if the id is already present.
    pub fn register(&mut self, spec: RuleSpec) -> Result<()> {
        if self.rules.iter().any(|r| r.id == spec.id) {
            return Err(Error::DuplicateRule(spec.id.to_string()));
        }
        self.rules.push(spec);
        Ok(())
    }

    /// Remove a rule from evaluation. Fails if the id is unknown.
    pub fn disable(&mut self, id: &str) -> Result<()> {
        let id = self.require(id)?.id;
        self.disabled.insert(id);
        Ok(())
    }

    /// Re-enable a previously disabled rule. Fails if the id is unknown.
    pub fn enable(&mut self, id: &str) -> Result<()> {
        let id = self.require(id)?.id;
        self.disabled.remove(id);
        Ok(())
    }

    /// Replace the default severity of a rule.
    pub fn override_severity(&mut self, id: &str, severity: Severity) -> Result<()> {
        self.require(id)?;
        if let Some(spec) = self.rules.iter_mut().find(|r| r.id == id) {
            spec.severity = severity;
        }
        Ok(())
    }

    /// Replace the numeric limit of a threshold rule.
    ///
    /// Fails with a config error for rules without a numeric constant.
    pub fn override_threshold(&mut self, id: &str, limit: i64) -> Result<()> {
        self.require(id)?;
        let Some(spec) = self.rules.iter_mut().find(|r| r.id == id) else {
            return Err(Error::UnknownRule(id.to_string()));
        };
        if !spec.check.set_threshold(limit) {
            return Err(Error::Config {
                message: format!("rule {} has no numeric threshold to override", id),
                path: None,
            });
        }
        Ok(())
    }

    /// Apply startup options: disables, severity overrides, threshold overrides.
    pub fn configure(&mut self, options: &RuleOptions) -> Result<()> {
        for id in &options.disabled {
            self.disable(id)?;
        }
        for (id, severity) in &options.severity {
            self.override_severity(id, *severity)?;
        }
        for (id, limit) in &options.thresholds {
            self.override_threshold(id, *limit)?;
        }
        Ok(())
    }

    /// Currently enabled rules, in insertion order.
    pub fn active_rules(&self) -> Vec<&RuleSpec> {
        self.rules
            .iter()
            .filter(|r| !self.disabled.contains(r.id))
            .collect()
    }

    /// All registered rules (enabled or not), in insertion order.
    pub fn all_rules(&self) -> &[RuleSpec] {
        &self.rules
    }

    /// Look up a rule by id.
    pub fn get(&self, id: &str) -> Option<&RuleSpec> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// Whether a rule is currently enabled.
    pub fn is_enabled(&self, id: &str) -> bool {
        self.get(id).is_some_and(|spec| !self.disabled.contains(spec.id))
    }

    fn require(&self, id: &str) -> Result<&RuleSpec> {
        self.rules
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| Error::UnknownRule(id.to_string()))
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
