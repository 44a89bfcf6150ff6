//! Rule description types.
//!
//! A `RuleSpec` is data: an id, a severity, an applicability predicate, and
//! a check. Checks are a closed enum rather than trait objects so threshold
//! overrides can rewrite a field in place and every violation message can be
//! rendered from the measured values uniformly.

use serde::{Deserialize, Serialize};

use crate::model::{FileKind, FileModel};
use crate::rules::import_order;

/// Finding severity.
///
/// `Error` findings drive the exit status; `Warning` findings are reported
/// but never fail a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Which files a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppliesTo {
    /// Every file.
    Any,
    /// Every file except test files.
    AnyExceptTests,
    /// Files of one structural kind.
    Kind(FileKind),
}

impl AppliesTo {
    /// Whether a rule with this scope applies to `model`.
    pub fn matches(self, model: &FileModel) -> bool {
        match self {
            AppliesTo::Any => true,
            AppliesTo::AnyExceptTests => !model.is_test_file,
            AppliesTo::Kind(kind) => model.kind == kind,
        }
    }

    /// Short description for the rules listing.
    pub fn describe(self) -> &'static str {
        match self {
            AppliesTo::Any => "any",
            AppliesTo::AnyExceptTests => "any except tests",
            AppliesTo::Kind(FileKind::Component) => "components",
            AppliesTo::Kind(FileKind::Hook) => "hooks",
            AppliesTo::Kind(FileKind::Utility) => "utilities",
            AppliesTo::Kind(FileKind::Type) => "type files",
            AppliesTo::Kind(FileKind::Test) => "test files",
        }
    }
}

/// The compliance predicate of one rule.
///
/// Every variant is total over well-formed models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleCheck {
    /// line_count must not exceed `limit`.
    MaxLines { limit: i64 },
    /// declared_props length must not exceed `limit`.
    MaxProps { limit: i64 },
    /// jsx_max_depth must not exceed `limit`.
    MaxJsxDepth { limit: i64 },
    /// No reassignable local bindings.
    NoMutableBinding,
    /// No loose equality comparisons.
    NoLooseEquality,
    /// No unconstrained dynamic types.
    NoAnyType,
    /// Exported functions must declare return types.
    ExplicitReturnTypes,
    /// Imports grouped by rank, alphabetized within each group.
    ImportOrder,
    /// Always panics; exercises the evaluator's panic isolation.
    #[cfg(test)]
    Panicking,
}

impl RuleCheck {
    /// Current numeric limit, if this check has one.
    pub fn threshold(&self) -> Option<i64> {
        match self {
            RuleCheck::MaxLines { limit }
            | RuleCheck::MaxProps { limit }
            | RuleCheck::MaxJsxDepth { limit } => Some(*limit),
            _ => None,
        }
    }

    /// Replace the numeric limit. Returns false for checks without one.
    pub fn set_threshold(&mut self, value: i64) -> bool {
        match self {
            RuleCheck::MaxLines { limit }
            | RuleCheck::MaxProps { limit }
            | RuleCheck::MaxJsxDepth { limit } => {
                *limit = value;
                true
            }
            _ => false,
        }
    }
}

/// One named, severity-tagged structural constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    /// Unique id, e.g. "max-file-lines".
    pub id: &'static str,
    /// Default severity (may be overridden via config).
    pub severity: Severity,
    /// Applicability predicate over file kind/flags.
    pub applies_to: AppliesTo,
    /// Compliance predicate.
    pub check: RuleCheck,
    /// Human-readable statement of the constraint, for the rules listing.
    pub summary: &'static str,
}

impl RuleSpec {
    pub fn new(
        id: &'static str,
        severity: Severity,
        applies_to: AppliesTo,
        check: RuleCheck,
        summary: &'static str,
    ) -> Self {
        Self {
            id,
            severity,
            applies_to,
            check,
            summary,
        }
    }

    /// Evaluate this rule against one model.
    ///
    /// Returns `None` when compliant, or the violation message with the
    /// measured values substituted in. Callers must have already filtered by
    /// [`AppliesTo::matches`].
    pub fn evaluate(&self, model: &FileModel) -> Option<String> {
        match &self.check {
            RuleCheck::MaxLines { limit } => (model.line_count > *limit).then(|| {
                format!("file has {} lines, limit is {}", model.line_count, limit)
            }),
            RuleCheck::MaxProps { limit } => {
                let count = model.declared_props.len() as i64;
                (count > *limit)
                    .then(|| format!("component declares {} props, limit is {}", count, limit))
            }
            RuleCheck::MaxJsxDepth { limit } => (model.jsx_max_depth > *limit).then(|| {
                format!(
                    "JSX nesting reaches depth {}, limit is {}",
                    model.jsx_max_depth, limit
                )
            }),
            RuleCheck::NoMutableBinding => model
                .uses_mutable_binding
                .then(|| "file declares a reassignable binding".to_string()),
            RuleCheck::NoLooseEquality => model
                .uses_loose_equality
                .then(|| "file compares with loose equality".to_string()),
            RuleCheck::NoAnyType => model
                .uses_any_type
                .then(|| "file uses the any type".to_string()),
            RuleCheck::ExplicitReturnTypes => (!model.has_explicit_return_types)
                .then(|| "exported function is missing an explicit return type".to_string()),
            RuleCheck::ImportOrder => import_order::first_divergence(&model.import_entries),
            #[cfg(test)]
            #[allow(clippy::panic)]
            RuleCheck::Panicking => panic!("synthetic rule failure"),
        }
    }
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
