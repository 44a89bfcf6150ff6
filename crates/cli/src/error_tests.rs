#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use yare::parameterized;

#[test]
fn config_error_display() {
    let err = Error::Config {
        message: "invalid version".into(),
        path: Some(PathBuf::from("gauge.toml")),
    };
    assert!(err.to_string().contains("invalid version"));
}

#[test]
fn duplicate_rule_display_names_id() {
    let err = Error::DuplicateRule("max-props".into());
    assert_eq!(err.to_string(), "duplicate rule: max-props");
}

#[test]
fn unknown_rule_display_names_id() {
    let err = Error::UnknownRule("no-such-rule".into());
    assert_eq!(err.to_string(), "unknown rule: no-such-rule");
}

#[parameterized(
    config = { Error::Config { message: "x".into(), path: None }, ExitCode::ConfigError },
    argument = { Error::Argument("x".into()), ExitCode::ConfigError },
    manifest = { Error::Manifest { path: PathBuf::from("m.json"), message: "x".into() }, ExitCode::ConfigError },
    duplicate_rule = { Error::DuplicateRule("x".into()), ExitCode::ConfigError },
    unknown_rule = { Error::UnknownRule("x".into()), ExitCode::ConfigError },
    internal = { Error::Internal("x".into()), ExitCode::InternalError },
)]
fn exit_code_mapping(err: Error, expected: ExitCode) {
    assert_eq!(ExitCode::from(&err), expected);
}
