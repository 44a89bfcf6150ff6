#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::finding::{Finding, Report};
use crate::rule::Severity;

fn render(report: &Report) -> serde_json::Value {
    let mut buf = Vec::new();
    JsonFormatter::new(&mut buf)
        .write_with_timestamp(report, "2026-01-01T00:00:00Z")
        .unwrap();
    serde_json::from_slice(&buf).unwrap()
}

#[test]
fn envelope_carries_timestamp_and_status() {
    let report = Report::from_findings(Vec::new());
    let json = render(&report);

    assert_eq!(json["timestamp"], "2026-01-01T00:00:00Z");
    assert_eq!(json["passed"], true);
    assert_eq!(json["exit_status"], 0);
    assert_eq!(json["findings"].as_array().unwrap().len(), 0);
}

#[test]
fn findings_flattened_into_envelope() {
    let report = Report::from_findings(vec![Finding::new(
        "src/a.ts",
        "no-any-type",
        Severity::Error,
        "file uses the any type",
    )]);
    let json = render(&report);

    assert_eq!(json["passed"], false);
    assert_eq!(json["error_count"], 1);

    let finding = &json["findings"][0];
    assert_eq!(finding["file_path"], "src/a.ts");
    assert_eq!(finding["rule_id"], "no-any-type");
    assert_eq!(finding["severity"], "error");
}

#[test]
fn rendering_is_deterministic_for_fixed_timestamp() {
    let report = Report::from_findings(vec![Finding::new(
        "src/a.ts",
        "max-props",
        Severity::Error,
        "m",
    )]);

    let mut first = Vec::new();
    let mut second = Vec::new();
    JsonFormatter::new(&mut first)
        .write_with_timestamp(&report, "2026-01-01T00:00:00Z")
        .unwrap();
    JsonFormatter::new(&mut second)
        .write_with_timestamp(&report, "2026-01-01T00:00:00Z")
        .unwrap();
    assert_eq!(first, second);
}
