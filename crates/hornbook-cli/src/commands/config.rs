use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::cli::ConfigCommands;
use crate::config::AppConfig;

/// Execute config subcommand
pub fn execute(cmd: ConfigCommands, config: &AppConfig, format: &str) -> Result<()> {
    match cmd {
        ConfigCommands::Init { path, force } => init(path, force),
        ConfigCommands::Show => show(config, format),
    }
}

/// Initialize a new config file
fn init(path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = path
        .or_else(|| AppConfig::default_config_path().ok())
        .context("Could not determine config file path")?;

    if config_path.exists() && !force {
        println!(
            "{} Config file already exists at: {}",
            "Error:".red().bold(),
            config_path.display()
        );
        println!("Use {} to overwrite", "--force".yellow());
        return Ok(());
    }

    AppConfig::create_example(&config_path)?;

    println!(
        "{} Created config file at: {}",
        "Success:".green().bold(),
        config_path.display()
    );
    println!(
        "\n{}",
        "Edit this file to point hornbook at your database and API keys.".dimmed()
    );
    println!(
        "{}",
        "Default values will be used until you customize the config.".dimmed()
    );

    Ok(())
}

/// Show the current effective configuration
fn show(config: &AppConfig, format: &str) -> Result<()> {
    match format {
        "json" => println!("{}", config.display_as_json()?),
        _ => println!("{}", config.display_as_toml()?),
    }

    println!(
        "{} {}",
        "Resolved database:".dimmed(),
        config.database_path().display()
    );

    Ok(())
}
