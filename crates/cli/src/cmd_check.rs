//! Check command implementation.

use gauge::cli::{CheckArgs, Cli, OutputFormat};
use gauge::color::resolve_color;
use gauge::config;
use gauge::error::ExitCode;
use gauge::evaluator;
use gauge::manifest;
use gauge::output::FormatOptions;
use gauge::output::json::JsonFormatter;
use gauge::output::text::TextFormatter;
use gauge::registry::RuleRegistry;

/// Run the check command.
pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    // Resolve config: explicit flag, else gauge.toml next to the manifest,
    // else gauge.toml in the cwd, else defaults.
    let config = match &cli.config {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load(path)?
        }
        None => {
            let manifest_dir = args.manifest.parent().filter(|p| !p.as_os_str().is_empty());
            let found = manifest_dir
                .and_then(config::find_config)
                .or_else(|| config::find_config(std::path::Path::new(".")));
            match found {
                Some(path) => {
                    tracing::debug!("loading config from {}", path.display());
                    config::load(&path)?
                }
                None => {
                    tracing::debug!("no config found, using defaults");
                    config::Config::default()
                }
            }
        }
    };

    // Build the registry and apply startup options
    let mut registry = RuleRegistry::with_builtin_rules();
    registry.configure(&config.rules)?;

    // Load the extractor's manifest
    let models = manifest::load(&args.manifest)?;
    tracing::debug!("loaded {} file models", models.len());

    // Evaluate
    let report = evaluator::evaluate(&models, &registry);

    // Render
    let limit = if args.no_limit { None } else { Some(args.limit) };
    match args.output {
        OutputFormat::Text => {
            let color_choice = resolve_color(args.color, args.no_color);
            let options = FormatOptions { limit };
            let mut formatter = TextFormatter::new(color_choice, options);

            formatter.write_findings(&report)?;
            formatter.write_summary(&report)?;
            if formatter.was_truncated() {
                formatter.write_truncation_message(report.findings.len())?;
            }
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(std::io::stdout());
            formatter.write(&report)?;
        }
    }

    let exit_code = if report.passed() {
        ExitCode::Success
    } else {
        ExitCode::CheckFailed
    };

    Ok(exit_code)
}
