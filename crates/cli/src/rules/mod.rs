//! Built-in rule catalog.
//!
//! All 10 built-in rules are defined here:
//! - max-file-lines: file length ceiling (Error)
//! - prefer-small-file: softer length target (Warning)
//! - max-component-lines: component length ceiling (Error)
//! - max-props: component prop count ceiling (Error)
//! - max-jsx-depth: JSX nesting ceiling (Error)
//! - no-mutable-binding: no reassignable locals (Error)
//! - no-loose-equality: strict equality only (Error)
//! - no-any-type: no dynamic types outside tests (Error)
//! - explicit-return-types: exported functions annotate returns (Error)
//! - import-order: grouped, alphabetized imports (Error)

pub mod import_order;

use crate::model::FileKind;
use crate::rule::{AppliesTo, RuleCheck, RuleSpec, Severity};

/// All built-in rule ids in canonical catalog order.
pub const RULE_IDS: &[&str] = &[
    "max-file-lines",
    "prefer-small-file",
    "max-component-lines",
    "max-props",
    "max-jsx-depth",
    "no-mutable-binding",
    "no-loose-equality",
    "no-any-type",
    "explicit-return-types",
    "import-order",
];

/// Create the built-in catalog, in canonical order.
pub fn builtin_rules() -> Vec<RuleSpec> {
    vec![
        RuleSpec::new(
            "max-file-lines",
            Severity::Error,
            AppliesTo::Any,
            RuleCheck::MaxLines { limit: 300 },
            "Files stay under 300 lines",
        ),
        RuleSpec::new(
            "prefer-small-file",
            Severity::Warning,
            AppliesTo::Any,
            RuleCheck::MaxLines { limit: 100 },
            "Files should stay under 100 lines",
        ),
        RuleSpec::new(
            "max-component-lines",
            Severity::Error,
            AppliesTo::Kind(FileKind::Component),
            RuleCheck::MaxLines { limit: 100 },
            "Components stay under 100 lines",
        ),
        RuleSpec::new(
            "max-props",
            Severity::Error,
            AppliesTo::Kind(FileKind::Component),
            RuleCheck::MaxProps { limit: 5 },
            "Components declare at most 5 props",
        ),
        RuleSpec::new(
            "max-jsx-depth",
            Severity::Error,
            AppliesTo::Kind(FileKind::Component),
            RuleCheck::MaxJsxDepth { limit: 5 },
            "JSX nests at most 5 levels deep",
        ),
        RuleSpec::new(
            "no-mutable-binding",
            Severity::Error,
            AppliesTo::Any,
            RuleCheck::NoMutableBinding,
            "No reassignable local bindings",
        ),
        RuleSpec::new(
            "no-loose-equality",
            Severity::Error,
            AppliesTo::Any,
            RuleCheck::NoLooseEquality,
            "Strict equality comparisons only",
        ),
        RuleSpec::new(
            "no-any-type",
            Severity::Error,
            AppliesTo::AnyExceptTests,
            RuleCheck::NoAnyType,
            "No any types outside test files",
        ),
        RuleSpec::new(
            "explicit-return-types",
            Severity::Error,
            AppliesTo::Any,
            RuleCheck::ExplicitReturnTypes,
            "Exported functions declare return types",
        ),
        RuleSpec::new(
            "import-order",
            Severity::Error,
            AppliesTo::Any,
            RuleCheck::ImportOrder,
            "Imports grouped by origin, alphabetized within groups",
        ),
    ]
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
