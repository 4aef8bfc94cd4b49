use colored::*;
use eyre::{Context, Result};
use std::fs;

use crate::cli::{ConfigAction, OutputFormat};
use crate::config::{Config, LogLevel};

pub fn run(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Show { format } => show(OutputFormat::resolve(format), config),
        ConfigAction::Get { key } => get(&key, config),
        ConfigAction::Set { key, value } => set(&key, &value, config),
    }
}

fn show(format: OutputFormat, config: &Config) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(config)?);
        }
        OutputFormat::Text => {
            println!("{}", "portfolio-bot Configuration".bold());
            println!();

            println!("  profile: {}", config.profile_path().display());
            println!("  log_level: {}", config.log_level.as_filter());
            println!();

            println!("{}:", "chat".cyan());
            println!("  color: {}", config.chat.color);
            println!("  show_disclaimer: {}", config.chat.show_disclaimer);
        }
    }

    Ok(())
}

fn lookup(key: &str, config: &Config) -> Option<String> {
    match key {
        "profile" => Some(config.profile.display().to_string()),
        "log_level" | "log-level" => Some(config.log_level.as_filter().to_string()),
        "chat.color" => Some(config.chat.color.to_string()),
        "chat.show_disclaimer" => Some(config.chat.show_disclaimer.to_string()),
        _ => None,
    }
}

fn get(key: &str, config: &Config) -> Result<()> {
    match lookup(key, config) {
        Some(v) => println!("{}", v),
        None => {
            eprintln!("{} Unknown config key: {}", "✗".red(), key);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn apply(key: &str, value: &str, config: &Config) -> Result<Config> {
    let mut new_config = config.clone();

    match key {
        "profile" => new_config.profile = value.into(),
        "log_level" | "log-level" => {
            new_config.log_level = LogLevel::from_name(value)
                .ok_or_else(|| eyre::eyre!("Invalid log level: {} (use trace, debug, info, warn, error, off)", value))?;
        }
        "chat.color" => {
            new_config.chat.color = value.parse().context("Invalid boolean value (use 'true' or 'false')")?;
        }
        "chat.show_disclaimer" => {
            new_config.chat.show_disclaimer =
                value.parse().context("Invalid boolean value (use 'true' or 'false')")?;
        }
        _ => {
            eyre::bail!("Unknown config key: {}", key);
        }
    }

    Ok(new_config)
}

fn set(key: &str, value: &str, config: &Config) -> Result<()> {
    println!("{} Setting {} = {}", "→".blue(), key.cyan(), value.green());

    let new_config = apply(key, value, config)?;

    let config_path = Config::config_dir().join("portfolio-bot.yaml");
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let yaml_str = serde_yaml::to_string(&new_config).context("Failed to serialize config")?;
    fs::write(&config_path, yaml_str).context("Failed to write config file")?;

    println!("  {} Saved to {}", "✓".green(), config_path.display());

    Ok(())
}
