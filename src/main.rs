//! Kubeforge CLI entrypoint.
//!
//! This is the main entrypoint for the kubeforge command-line tool.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use kubeforge::cli::{Cli, Commands, OutputFormatter};
use kubeforge::config::{ConfigParser, ConfigValidator, defaults, find_config_file};
use kubeforge::error::Result;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Main entrypoint.
fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the logging system.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Dispatches the selected command.
fn run(cli: Cli) -> Result<()> {
    let formatter = OutputFormatter::new(cli.output);

    match cli.command {
        Commands::Init { path, force } => cmd_init(&path, force),
        Commands::Validate => cmd_validate(cli.config.as_ref(), &formatter),
    }
}

/// Initialize a new project.
fn cmd_init(path: &PathBuf, force: bool) -> Result<()> {
    info!("Initializing new kubeforge project in: {}", path.display());

    let config_path = path.join("kubeforge.cluster.yaml");
    let env_path = path.join(".env.example");

    // Check if files exist
    if !force && config_path.exists() {
        eprintln!("Configuration file already exists: {}", config_path.display());
        eprintln!("Use --force to overwrite.");
        return Ok(());
    }

    // Create directory if needed
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }

    // Write config template
    let config_template = include_str!("../templates/kubeforge.cluster.yaml");
    std::fs::write(&config_path, config_template)?;
    eprintln!("Created: {}", config_path.display());

    // Write .env.example
    let env_template = include_str!("../templates/.env.example");
    std::fs::write(&env_path, env_template)?;
    eprintln!("Created: {}", env_path.display());

    eprintln!("\nProject initialized successfully!");
    eprintln!("Next steps:");
    eprintln!("  1. Edit kubeforge.cluster.yaml with your cluster configuration");
    eprintln!("  2. Run 'kubeforge validate' to check your configuration");

    Ok(())
}

/// Validate configuration.
fn cmd_validate(config_path: Option<&PathBuf>, formatter: &OutputFormatter) -> Result<()> {
    let config_file = resolve_config_path(config_path)?;
    info!("Validating configuration: {}", config_file.display());

    // Load .env
    let parser = ConfigParser::new().with_base_path(
        config_file
            .parent()
            .unwrap_or_else(|| Path::new(".")),
    );
    parser.load_dotenv()?;

    // Parse config and apply defaults
    let mut config = parser.load_with_env(&config_file)?;
    defaults::apply(&mut config);

    // Validate
    let validator = ConfigValidator::new();
    match validator.validate(&config) {
        Ok(()) => {
            eprintln!("{}", formatter.format_validation(&config, None));
            Ok(())
        }
        Err(errors) => {
            eprintln!("{}", formatter.format_validation(&config, Some(&errors)));
            Err(errors.into())
        }
    }
}

/// Resolves the configuration file path.
fn resolve_config_path(config_path: Option<&PathBuf>) -> Result<PathBuf> {
    config_path.map_or_else(|| find_config_file("."), |path| Ok(path.clone()))
}
