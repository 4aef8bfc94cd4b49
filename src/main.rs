use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

mod classify;
mod cli;
mod commands;
mod config;
mod display;
mod profile;
mod render;
mod session;
mod topic;

use cli::{Cli, Commands};
use config::{Config, LogLevel};

fn setup_logging(log_level: &LogLevel) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("portfolio-bot")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("portfolio-bot.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG env var takes precedence, otherwise use config log_level
    let mut builder = env_logger::Builder::new();

    if std::env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    } else {
        builder.filter_level(log_level.to_level_filter());
    }

    builder.target(env_logger::Target::Pipe(target)).init();

    info!("Logging initialized, writing to: {}", log_file.display());
    info!(
        "Log level: {} (from {})",
        log_level.as_filter(),
        if std::env::var("RUST_LOG").is_ok() { "RUST_LOG env" } else { "config" }
    );
    Ok(())
}

fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => commands::chat::run(&config),
        Commands::Ask { text, format } => commands::ask::run(&text.join(" "), format, &config),
        Commands::Topic { key, format } => commands::topic::run(&key, format, &config),
        Commands::Topics { format } => commands::topics::run(cli::OutputFormat::resolve(format)),
        Commands::Classify { text, format } => {
            commands::classify::run(&text.join(" "), cli::OutputFormat::resolve(format))
        }
        Commands::Admissions { format } => commands::admissions::run(cli::OutputFormat::resolve(format), &config),
        Commands::Links { format } => commands::links::run(cli::OutputFormat::resolve(format), &config),
        Commands::Config { action } => commands::config::run(action, &config),
        Commands::Completions { shell } => commands::completions::run(shell),
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments first
    let cli = Cli::parse();

    // Load configuration (before logging, so log messages in Config::load are silent)
    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    if let Some(profile) = &cli.profile {
        config.profile = profile.clone();
    }
    if cli.no_color {
        config.chat.color = false;
    }
    if !config.chat.color {
        colored::control::set_override(false);
    }

    setup_logging(&config.log_level).context("Failed to setup logging")?;

    info!("Starting portfolio-bot with config from: {:?}", cli.config);
    info!("Profile: {}", config.profile_path().display());

    // One red line: the context followed by each cause
    if let Err(err) = run(cli, config) {
        log::error!("{:#}", err);
        eprintln!("{}", format!("{:#}", err).red());
        std::process::exit(1);
    }

    Ok(())
}
