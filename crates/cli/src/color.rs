//! Color detection and terminal styling.
//!
//! Resolution order:
//! 1. --color / --no-color flags
//! 2. NO_COLOR env var -> no color
//! 3. COLOR env var -> color
//! 4. default: color only when stdout is a TTY outside agent/CI environments

use std::io::IsTerminal;
use termcolor::ColorChoice;

/// Resolve color choice from CLI flags and environment variables.
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` when set to any
/// value (including empty string) disables color. The `COLOR` env var
/// follows a similar convention for forcing color output.
pub fn resolve_color(force_color: bool, no_color: bool) -> ColorChoice {
    if no_color {
        return ColorChoice::Never;
    }
    if force_color {
        return ColorChoice::Always;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    if std::env::var_os("COLOR").is_some() {
        return ColorChoice::Always;
    }
    if !std::io::stdout().is_terminal() {
        return ColorChoice::Never;
    }
    if is_agent_environment() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Check if running in an AI agent or CI environment.
fn is_agent_environment() -> bool {
    std::env::var_os("CLAUDE_CODE").is_some()
        || std::env::var_os("CODEX").is_some()
        || std::env::var_os("CURSOR").is_some()
        || std::env::var_os("CI").is_some()
}

/// Color scheme for report output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Red "error" severity.
    pub fn error() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Yellow "warning" severity.
    pub fn warning() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow)).set_bold(true);
        spec
    }

    /// Green pass indicator.
    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    /// Cyan file path.
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Bold rule id.
    pub fn rule_id() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
