//! CLI module for the kubeforge tool.
//!
//! This module provides the command-line interface for working with
//! cluster configuration files.

mod commands;
mod output;

pub use commands::{Cli, Commands, OutputFormat};
pub use output::OutputFormatter;
