use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use notion_utils::commands::config::ConfigAction;
use notion_utils::commands::get::GetOptions;
use notion_utils::commands::{self, CmdMessage, CmdResult, MessageLevel};
use notion_utils::config::{NotionConfig, CONFIG_KEYS};
use notion_utils::error::{NotionError, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;

mod args;
mod logging;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(log_level(&cli)?);

    let config_dir = cli.config_dir;
    let result = match cli.command {
        Commands::Id { inputs } => commands::id::run(&load_config(config_dir)?, &inputs)?,
        Commands::Get {
            path,
            file,
            default,
            raw,
        } => {
            let input = read_input(file.as_deref())?;
            commands::get::run(&path, &input, &GetOptions { default, raw })?
        }
        Commands::Sign { urls } => commands::sign::run_sign(&load_config(config_dir)?, &urls)?,
        Commands::Unsign { urls } => {
            commands::sign::run_unsign(&load_config(config_dir)?, &urls)?
        }
        Commands::Config { key, value } => {
            let action = match (key, value) {
                (None, _) => ConfigAction::ShowAll,
                (Some(k), None) => ConfigAction::ShowKey(k),
                (Some(k), Some(v)) => ConfigAction::Set(k, v),
            };
            commands::config::run(&resolve_config_dir(config_dir)?, action)?
        }
    };

    print_result(&result);
    Ok(())
}

fn log_level(cli: &Cli) -> Result<LevelFilter> {
    match &cli.log_level {
        Some(s) => logging::parse_level(s)
            .ok_or_else(|| NotionError::Config(format!("Invalid log level: {}", s))),
        None if cli.verbose => Ok(LevelFilter::DEBUG),
        None => Ok(LevelFilter::WARN),
    }
}

/// Only the subcommands that use the config read it, so a broken
/// config.json does not affect `get`.
fn load_config(flag: Option<PathBuf>) -> Result<NotionConfig> {
    NotionConfig::load(resolve_config_dir(flag)?)
}

fn resolve_config_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    ProjectDirs::from("so", "notion", "nutil")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| NotionError::Config("Could not determine config dir".into()))
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn print_result(result: &CmdResult) {
    for value in &result.values {
        println!("{}", value);
    }
    if let Some(config) = &result.config {
        for key in CONFIG_KEYS {
            if let Some(value) = config.get(key) {
                println!("{} = {}", key.bold(), value);
            }
        }
    }
    print_messages(&result.messages);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Success => eprintln!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}
