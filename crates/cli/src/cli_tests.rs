#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use clap::Parser;

#[test]
fn check_requires_manifest_argument() {
    let result = Cli::try_parse_from(["gauge", "check"]);
    assert!(result.is_err());
}

#[test]
fn check_parses_manifest_path() {
    let cli = Cli::try_parse_from(["gauge", "check", "models.json"]).unwrap();
    let Some(Command::Check(args)) = cli.command else {
        panic!("expected check command");
    };
    assert_eq!(args.manifest, PathBuf::from("models.json"));
    assert_eq!(args.limit, 50);
    assert!(!args.no_limit);
}

#[test]
fn check_accepts_json_output() {
    let cli = Cli::try_parse_from(["gauge", "check", "m.json", "--output", "json"]).unwrap();
    let Some(Command::Check(args)) = cli.command else {
        panic!("expected check command");
    };
    assert_eq!(args.output, OutputFormat::Json);
}

#[test]
fn global_config_flag_parses() {
    let cli = Cli::try_parse_from(["gauge", "-C", "custom.toml", "check", "m.json"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
}

#[test]
fn rules_command_parses() {
    let cli = Cli::try_parse_from(["gauge", "rules"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Rules(_))));
}

#[test]
fn limit_flag_parses() {
    let cli = Cli::try_parse_from(["gauge", "check", "m.json", "--limit", "5"]).unwrap();
    let Some(Command::Check(args)) = cli.command else {
        panic!("expected check command");
    };
    assert_eq!(args.limit, 5);
}
