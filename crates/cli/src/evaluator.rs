//! Core evaluation: models x active rules -> findings.
//!
//! Files are evaluated in parallel with rayon; rules share no mutable
//! state, so the only synchronization is collecting results. The final
//! sort in [`Report::from_findings`] restores determinism regardless of
//! completion order.

use std::collections::HashMap;
use std::panic::{AssertUnwindSafe, catch_unwind};

use rayon::prelude::*;

use crate::finding::{Finding, Report};
use crate::model::FileModel;
use crate::registry::RuleRegistry;
use crate::rule::{RuleSpec, Severity};

/// Synthetic id for findings produced by a panicking rule check.
pub const INTERNAL_RULE_ERROR: &str = "internal-rule-error";

/// Synthetic id for findings produced by invariant-violating input models.
pub const MALFORMED_FILE_MODEL: &str = "malformed-file-model";

/// Evaluate every active rule against every well-formed model.
///
/// Malformed models (duplicate path, invariant breach) are excluded from
/// rule evaluation and surfaced as `malformed-file-model` findings instead
/// of faults, so one bad input cannot abort the rest of the run.
pub fn evaluate(models: &[FileModel], registry: &RuleRegistry) -> Report {
    let (eligible, mut findings) = screen_models(models);
    let rules = registry.active_rules();

    tracing::debug!(
        files = eligible.len(),
        excluded = models.len() - eligible.len(),
        rules = rules.len(),
        "evaluating"
    );

    let rule_findings: Vec<Finding> = eligible
        .par_iter()
        .flat_map_iter(|model| evaluate_file(model, &rules))
        .collect();

    findings.extend(rule_findings);
    Report::from_findings(findings)
}

/// Split input models into rule-evaluation candidates and malformed-model
/// findings.
///
/// A duplicated path excludes every occurrence (the records contradict each
/// other; neither can be trusted) and yields one finding for the path.
fn screen_models(models: &[FileModel]) -> (Vec<&FileModel>, Vec<Finding>) {
    let mut occurrences: HashMap<&str, usize> = HashMap::with_capacity(models.len());
    for model in models {
        *occurrences.entry(model.path.as_str()).or_default() += 1;
    }

    let mut eligible = Vec::with_capacity(models.len());
    let mut findings = Vec::new();
    let mut reported_duplicates: Vec<&str> = Vec::new();

    for model in models {
        let count = occurrences.get(model.path.as_str()).copied().unwrap_or(0);
        if count > 1 {
            if !reported_duplicates.contains(&model.path.as_str()) {
                reported_duplicates.push(model.path.as_str());
                findings.push(Finding::new(
                    model.path.clone(),
                    MALFORMED_FILE_MODEL,
                    Severity::Error,
                    format!(
                        "path appears {} times in the input; all occurrences excluded",
                        count
                    ),
                ));
            }
            continue;
        }

        match model.validate() {
            Ok(()) => eligible.push(model),
            Err(reason) => findings.push(Finding::new(
                model.path.clone(),
                MALFORMED_FILE_MODEL,
                Severity::Error,
                format!("{}; file excluded from evaluation", reason),
            )),
        }
    }

    (eligible, findings)
}

/// Apply every applicable rule to one model.
///
/// A panicking check is converted to an `internal-rule-error` finding
/// naming the rule; remaining rules still run.
fn evaluate_file(model: &FileModel, rules: &[&RuleSpec]) -> Vec<Finding> {
    rules
        .iter()
        .filter(|rule| rule.applies_to.matches(model))
        .filter_map(|rule| {
            match catch_unwind(AssertUnwindSafe(|| rule.evaluate(model))) {
                Ok(None) => None,
                Ok(Some(message)) => Some(Finding::new(
                    model.path.clone(),
                    rule.id,
                    rule.severity,
                    message,
                )),
                Err(_) => Some(Finding::new(
                    model.path.clone(),
                    INTERNAL_RULE_ERROR,
                    Severity::Error,
                    format!("rule {} failed while evaluating this file", rule.id),
                )),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod tests;
