//! Config command - write, check and inspect the ledger rules file.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Subcommand};
use console::style;

use acsum_core::SummaryConfig;

use super::load_config;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Write a configuration file, optionally overriding the ledger rules
    Init(InitArgs),

    /// Check a configuration file against the ledger rule constraints
    Check {
        /// File to check (default: --config or the default location)
        file: Option<PathBuf>,
    },

    /// Get a specific configuration value
    Get {
        /// Configuration key (e.g., "ledger.debit_prefix")
        key: String,
    },

    /// Show configuration file path
    Path,
}

#[derive(Args)]
struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite existing file
    #[arg(long)]
    force: bool,

    /// Prefix gating both debit and credit accounts
    #[arg(long)]
    group_prefix: Option<String>,

    /// Prefix of debit-category account codes
    #[arg(long)]
    debit_prefix: Option<String>,

    /// Prefix of credit-category account codes
    #[arg(long)]
    credit_prefix: Option<String>,

    /// Text written for header fields that are not found
    #[arg(long)]
    not_found: Option<String>,
}

impl InitArgs {
    fn build_config(&self) -> SummaryConfig {
        let mut config = SummaryConfig::default();
        if let Some(prefix) = &self.group_prefix {
            config.ledger.group_prefix = prefix.clone();
        }
        if let Some(prefix) = &self.debit_prefix {
            config.ledger.debit_prefix = prefix.clone();
        }
        if let Some(prefix) = &self.credit_prefix {
            config.ledger.credit_prefix = prefix.clone();
        }
        if let Some(not_found) = &self.not_found {
            config.extraction.not_found = not_found.clone();
        }
        config
    }
}

pub fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(config_path),
        ConfigCommand::Init(init_args) => init_config(init_args),
        ConfigCommand::Check { file } => check_config(file, config_path),
        ConfigCommand::Get { key } => get_config(&key, config_path),
        ConfigCommand::Path => show_path(),
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("acsum")
        .join("config.json")
}

fn show_config(config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn init_config(args: InitArgs) -> anyhow::Result<()> {
    let output_path = args.output.clone().unwrap_or_else(default_config_path);

    if output_path.exists() && !args.force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            output_path.display()
        );
    }

    let config = args.build_config();
    config.validate()?;

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    config.save(&output_path)?;

    println!(
        "{} Created configuration file at {} (debit {}*, credit {}* within {}*)",
        style("✓").green(),
        output_path.display(),
        config.ledger.debit_prefix,
        config.ledger.credit_prefix,
        config.ledger.group_prefix
    );

    Ok(())
}

fn check_config(file: Option<PathBuf>, config_path: Option<&str>) -> anyhow::Result<()> {
    let path = file
        .or_else(|| config_path.map(PathBuf::from))
        .unwrap_or_else(default_config_path);

    let config = SummaryConfig::from_file(&path)
        .with_context(|| format!("invalid configuration {}", path.display()))?;

    let rules = &config.ledger;
    println!("{} {} is valid", style("✓").green(), path.display());
    println!("  debit:  {}* (within {}*)", rules.debit_prefix, rules.group_prefix);
    println!("  credit: {}* (within {}*)", rules.credit_prefix, rules.group_prefix);
    println!("  not found: {}", config.extraction.not_found);

    Ok(())
}

fn get_config(key: &str, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let json = serde_json::to_value(&config)?;

    let mut current = &json;
    for part in key.split('.') {
        current = current
            .get(part)
            .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;
    }

    println!("{}", serde_json::to_string_pretty(current)?);

    Ok(())
}

fn show_path() -> anyhow::Result<()> {
    let config_path = default_config_path();

    println!("Configuration file: {}", config_path.display());

    if config_path.exists() {
        match SummaryConfig::from_file(&config_path) {
            Ok(_) => println!("Status: {}", style("valid").green()),
            Err(err) => println!("Status: {} ({})", style("invalid").red(), err),
        }
    } else {
        println!("Status: {}", style("not created").yellow());
        println!();
        println!("Run 'acsum config init' to create a configuration file.");
    }

    Ok(())
}
