//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable), with specialized
//! rendering for converted rule sets and conversion reports.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};
use tracing::{debug, trace};
use wp2vercel_core::{ConversionReport, FallbackField, FallbackReason, TargetDocument};

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a conversion report
    fn format_report(&self, report: &ConversionReport) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => {
                // For human format, use pretty JSON as fallback
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_report(&self, report: &ConversionReport) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_report_human(report)),
            _ => self.format(report),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    verbose: u8,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool, verbose: u8) -> Self {
        Self::with_writer(format, use_color, quiet, verbose, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        verbose: u8,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            verbose,
            writer,
        }
    }

    /// Whether human-readable output is selected
    pub fn is_human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet || !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        trace!(bytes = formatted.len(), "Outputting data");

        if self.is_human() || self.format == OutputFormat::Json {
            self.writeln(&formatted)
        } else {
            // YAML and pretty JSON carry their own layout
            self.write(&formatted)?;
            if !formatted.ends_with('\n') {
                self.writeln("")?;
            }
            Ok(())
        }
    }

    /// Write a conversion report with specialized formatting
    pub fn report(&mut self, report: &ConversionReport) -> Result<()> {
        let formatted = self.format.format_report(report)?;
        self.write(&formatted)?;
        if !formatted.ends_with('\n') {
            self.writeln("")?;
        }
        Ok(())
    }

    /// Write converted rules as a table (human) or as the document (machine formats)
    pub fn rules(&mut self, document: &TargetDocument) -> Result<()> {
        if !self.is_human() {
            return self.data(document);
        }

        if document.is_empty() {
            return self.info("The export contains no redirect rules");
        }

        let rows = document
            .redirects
            .iter()
            .enumerate()
            .map(|(index, rule)| {
                vec![
                    index.to_string(),
                    rule.source.clone(),
                    rule.destination.clone(),
                    if rule.permanent { "yes" } else { "no" }.to_string(),
                ]
            })
            .collect();

        self.table(&["#", "Source", "Destination", "Permanent"], rows)
    }

    /// Check if verbose output should be shown
    pub fn is_verbose(&self) -> bool {
        self.verbose > 0
    }

    /// Write debug information if verbose mode is enabled
    pub fn debug(&mut self, message: &str) -> Result<()> {
        if self.is_verbose() && self.is_human() {
            if self.use_color {
                self.writeln(&format!("{} {}", "DEBUG:".dimmed(), message.dimmed()))
            } else {
                self.writeln(&format!("DEBUG: {}", message))
            }
        } else {
            Ok(())
        }
    }

    /// Write a table (for human format)
    pub fn table(&mut self, headers: &[&str], rows: Vec<Vec<String>>) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }

        // Calculate column widths
        let mut widths = headers.iter().map(|h| h.chars().count()).collect::<Vec<_>>();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
        }

        let header_row = headers
            .iter()
            .enumerate()
            .map(|(i, h)| format!("{:width$}", h, width = widths[i]))
            .collect::<Vec<_>>()
            .join(" │ ");

        if self.use_color {
            self.writeln(header_row.trim_end().bold().to_string().as_str())?;
        } else {
            self.writeln(header_row.trim_end())?;
        }

        let separator = widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─");
        self.writeln(&separator)?;

        for row in rows {
            let row_str = row
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    if i < widths.len() {
                        format!("{:width$}", cell, width = widths[i])
                    } else {
                        cell.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join(" │ ");
            self.writeln(row_str.trim_end())?;
        }

        Ok(())
    }
}

/// Format a conversion report for human reading
fn format_report_human(report: &ConversionReport) -> String {
    let mut output = String::new();

    output.push_str("📊 Conversion Summary:\n");
    output.push_str(&format!("  Rules: {}\n", report.total));
    output.push_str(&format!("  Permanent (301): {}\n", report.permanent));
    output.push_str(&format!("  Temporary: {}\n", report.temporary));

    if !report.has_fallbacks() {
        output.push_str("✅ Every rule kept its source and destination\n");
        return output;
    }

    output.push_str(&format!(
        "\n⚠️ {} path(s) replaced with \"/\":\n",
        report.fallbacks.len()
    ));

    for fallback in &report.fallbacks {
        let original = match (fallback.field, fallback.reason) {
            (FallbackField::Source, FallbackReason::Missing) => "match_url is missing",
            (FallbackField::Source, FallbackReason::Empty) => "match_url is empty",
            (FallbackField::Destination, FallbackReason::Missing) => "action_data.url is missing",
            (FallbackField::Destination, FallbackReason::Empty) => "action_data.url is empty",
        };
        output.push_str(&format!(
            "  • Rule {}: {} → {} set to \"/\"\n",
            fallback.index, original, fallback.field
        ));
    }

    output
}
