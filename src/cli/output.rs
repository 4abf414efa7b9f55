//! Output formatting for CLI commands.
//!
//! This module provides formatting utilities for displaying
//! validation outcomes to the user in various formats.

use colored::Colorize;
use std::fmt::Write;
use tabled::{Table, Tabled};

use crate::config::{ClusterConfig, ValidationErrors};

use super::commands::OutputFormat;

/// Output formatter for CLI.
#[derive(Debug)]
pub struct OutputFormatter {
    /// Output format.
    format: OutputFormat,
}

/// Violation row for table display.
#[derive(Tabled)]
struct ViolationRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Rule")]
    rule: String,
    #[tabled(rename = "Message")]
    message: String,
}

impl OutputFormatter {
    /// Creates a new output formatter.
    #[must_use]
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a validation outcome for display.
    ///
    /// `errors` is `None` when the configuration is valid.
    #[must_use]
    pub fn format_validation(
        &self,
        config: &ClusterConfig,
        errors: Option<&ValidationErrors>,
    ) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(&ValidationJson::new(config, errors))
                    .unwrap_or_default()
            }
            OutputFormat::Text => Self::format_validation_text(config, errors),
        }
    }

    /// Formats a validation outcome as text.
    fn format_validation_text(
        config: &ClusterConfig,
        errors: Option<&ValidationErrors>,
    ) -> String {
        let mut output = String::new();

        match errors {
            None => {
                let _ = writeln!(output, "{} Configuration is valid.", "\u{2713}".green());
            }
            Some(errors) => {
                let _ = writeln!(
                    output,
                    "{} Configuration has {} violation(s):\n",
                    "\u{2717}".red(),
                    errors.len().to_string().red()
                );

                let rows: Vec<ViolationRow> = errors
                    .errors()
                    .iter()
                    .enumerate()
                    .map(|(i, v)| ViolationRow {
                        index: i + 1,
                        field: v.field.clone(),
                        rule: v.kind.to_string(),
                        message: Self::truncate(&v.message, 60),
                    })
                    .collect();

                let table = Table::new(rows).to_string();
                output.push_str(&table);
                output.push('\n');
            }
        }

        // Summary
        let _ = write!(
            output,
            "\nConfiguration summary:\n  Image: {}\n  Control plane: {}\n  Lifecycle hooks: {}\n",
            config.image,
            if config.control_plane.is_some() {
                "customized"
            } else {
                "default"
            },
            config.hook_count()
        );

        output
    }

    /// Truncates a string to a maximum length.
    fn truncate(s: &str, max_len: usize) -> String {
        if s.len() <= max_len {
            s.to_string()
        } else {
            format!("{}...", &s[..max_len - 3])
        }
    }
}

// JSON serialization helpers

#[derive(serde::Serialize)]
struct ValidationJson {
    valid: bool,
    image: String,
    hook_count: usize,
    violation_count: usize,
    violations: Vec<ViolationJson>,
}

#[derive(serde::Serialize)]
struct ViolationJson {
    field: String,
    rule: String,
    message: String,
}

impl ValidationJson {
    fn new(config: &ClusterConfig, errors: Option<&ValidationErrors>) -> Self {
        let violations: Vec<ViolationJson> = errors
            .map(|e| {
                e.errors()
                    .iter()
                    .map(|v| ViolationJson {
                        field: v.field.clone(),
                        rule: v.kind.to_string(),
                        message: v.message.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            valid: violations.is_empty(),
            image: config.image.clone(),
            hook_count: config.hook_count(),
            violation_count: violations.len(),
            violations,
        }
    }
}
