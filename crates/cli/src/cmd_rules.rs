//! Rules listing command.

use std::io::Write;

use termcolor::{StandardStream, WriteColor};

use gauge::cli::{Cli, OutputFormat, RulesArgs};
use gauge::color::{resolve_color, scheme};
use gauge::config;
use gauge::registry::RuleRegistry;
use gauge::rule::Severity;

/// Run the rules command: list the catalog with effective settings.
pub fn run(cli: &Cli, args: &RulesArgs) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => config::load(path)?,
        None => match config::find_config(std::path::Path::new(".")) {
            Some(path) => config::load(&path)?,
            None => config::Config::default(),
        },
    };

    let mut registry = RuleRegistry::with_builtin_rules();
    registry.configure(&config.rules)?;

    match args.output {
        OutputFormat::Json => write_json(&registry)?,
        OutputFormat::Text => write_text(&registry)?,
    }

    Ok(())
}

fn write_json(registry: &RuleRegistry) -> anyhow::Result<()> {
    #[derive(serde::Serialize)]
    struct RuleRow<'a> {
        id: &'a str,
        severity: Severity,
        applies_to: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        threshold: Option<i64>,
        enabled: bool,
        summary: &'a str,
    }

    let rows: Vec<RuleRow> = registry
        .all_rules()
        .iter()
        .map(|spec| RuleRow {
            id: spec.id,
            severity: spec.severity,
            applies_to: spec.applies_to.describe(),
            threshold: spec.check.threshold(),
            enabled: registry.is_enabled(spec.id),
            summary: spec.summary,
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn write_text(registry: &RuleRegistry) -> anyhow::Result<()> {
    let mut stdout = StandardStream::stdout(resolve_color(false, false));

    for spec in registry.all_rules() {
        stdout.set_color(&scheme::rule_id())?;
        write!(stdout, "{}", spec.id)?;
        stdout.reset()?;

        write!(stdout, " [")?;
        let severity_spec = match spec.severity {
            Severity::Error => scheme::error(),
            Severity::Warning => scheme::warning(),
        };
        stdout.set_color(&severity_spec)?;
        write!(stdout, "{}", spec.severity)?;
        stdout.reset()?;
        write!(stdout, "]")?;

        if !registry.is_enabled(spec.id) {
            write!(stdout, " (disabled)")?;
        }

        write!(stdout, " {}", spec.summary)?;
        if let Some(threshold) = spec.check.threshold() {
            write!(stdout, " (limit: {})", threshold)?;
        }
        writeln!(stdout, " [applies to {}]", spec.applies_to.describe())?;
    }

    Ok(())
}
