//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed). The report
//! itself is timestamp-free so repeated evaluations of the same input are
//! byte-identical; the timestamp lives only in this envelope.

use std::io::Write;

use chrono::Utc;
use serde::Serialize;

use crate::finding::Report;

/// Report plus run metadata for machine consumption.
#[derive(Debug, Serialize)]
struct Envelope<'a> {
    timestamp: &'a str,
    passed: bool,
    #[serde(flatten)]
    report: &'a Report,
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the complete JSON output with the current timestamp.
    pub fn write(&mut self, report: &Report) -> std::io::Result<()> {
        let timestamp = Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        self.write_with_timestamp(report, &timestamp)
    }

    /// Write the complete JSON output with an explicit timestamp.
    pub fn write_with_timestamp(
        &mut self,
        report: &Report,
        timestamp: &str,
    ) -> std::io::Result<()> {
        let envelope = Envelope {
            timestamp,
            passed: report.passed(),
            report,
        };
        let json = serde_json::to_string_pretty(&envelope).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
