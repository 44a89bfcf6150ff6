//! Text output formatter.
//!
//! One line per finding:
//! ```text
//! <path>:<rule>:<severity>: <message>
//! ```
//! followed by a summary line with the error/warning tallies.

use std::io::Write;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::FormatOptions;
use crate::color::scheme;
use crate::finding::{Finding, Report};
use crate::rule::Severity;

/// Text output formatter with color support.
pub struct TextFormatter {
    stdout: StandardStream,
    options: FormatOptions,
    findings_shown: usize,
    truncated: bool,
}

impl TextFormatter {
    /// Create a new text formatter.
    pub fn new(color_choice: ColorChoice, options: FormatOptions) -> Self {
        Self {
            stdout: StandardStream::stdout(color_choice),
            options,
            findings_shown: 0,
            truncated: false,
        }
    }

    /// Write every finding in the report, honoring the display limit.
    pub fn write_findings(&mut self, report: &Report) -> std::io::Result<()> {
        for finding in &report.findings {
            if let Some(limit) = self.options.limit
                && self.findings_shown >= limit
            {
                self.truncated = true;
                return Ok(());
            }
            self.write_finding(finding)?;
            self.findings_shown += 1;
        }
        Ok(())
    }

    fn write_finding(&mut self, finding: &Finding) -> std::io::Result<()> {
        // Path in cyan
        self.stdout.set_color(&scheme::path())?;
        write!(self.stdout, "{}", finding.file_path)?;
        self.stdout.reset()?;

        // Rule id in bold
        write!(self.stdout, ":")?;
        self.stdout.set_color(&scheme::rule_id())?;
        write!(self.stdout, "{}", finding.rule_id)?;
        self.stdout.reset()?;

        // Severity colored by level
        write!(self.stdout, ":")?;
        let spec = match finding.severity {
            Severity::Error => scheme::error(),
            Severity::Warning => scheme::warning(),
        };
        self.stdout.set_color(&spec)?;
        write!(self.stdout, "{}", finding.severity)?;
        self.stdout.reset()?;

        writeln!(self.stdout, ": {}", finding.message)
    }

    /// Write the summary line.
    pub fn write_summary(&mut self, report: &Report) -> std::io::Result<()> {
        if report.findings.is_empty() {
            self.stdout.set_color(&scheme::pass())?;
            write!(self.stdout, "ok")?;
            self.stdout.reset()?;
            writeln!(self.stdout, ": no findings")?;
            return Ok(());
        }

        writeln!(
            self.stdout,
            "{} error{}, {} warning{}",
            report.error_count,
            if report.error_count == 1 { "" } else { "s" },
            report.warning_count,
            if report.warning_count == 1 { "" } else { "s" },
        )
    }

    /// Write truncation message if applicable.
    pub fn write_truncation_message(&mut self, total: usize) -> std::io::Result<()> {
        if let Some(limit) = self.options.limit
            && self.truncated
            && total > limit
        {
            writeln!(
                self.stdout,
                "Stopped after {} findings. Use --no-limit to see all.",
                limit
            )?;
        }
        Ok(())
    }

    /// Check if output was truncated.
    pub fn was_truncated(&self) -> bool {
        self.truncated
    }
}

/// Render a report to a plain string, uncolored and unlimited.
///
/// This is the pure form of the text rendering, suitable for callers that
/// want the bytes rather than terminal output.
pub fn render_plain(report: &Report) -> String {
    let mut out = String::new();
    for finding in &report.findings {
        out.push_str(&format!(
            "{}:{}:{}: {}\n",
            finding.file_path, finding.rule_id, finding.severity, finding.message
        ));
    }
    if report.findings.is_empty() {
        out.push_str("ok: no findings\n");
    } else {
        out.push_str(&format!(
            "{} error{}, {} warning{}\n",
            report.error_count,
            if report.error_count == 1 { "" } else { "s" },
            report.warning_count,
            if report.warning_count == 1 { "" } else { "s" },
        ));
    }
    out
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
