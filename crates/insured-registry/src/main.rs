//! `pojistenci` - CLI for insured-registry
//!
//! Starts the interactive registry, or inspects its configuration.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;

use anyhow::Context;
use clap::Parser;

use insured_registry::cli::{Cli, Command, ConfigCommand};
use insured_registry::{init_logging, Config, Console};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    match cli.command {
        None | Some(Command::Run) => {
            let config = Config::load_from(cli.config).context("loading configuration")?;
            handle_run(&config)
        }
        Some(Command::Config(config_cmd)) => handle_config(cli.config, config_cmd),
    }
}

fn handle_run(config: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), config)?;
    console.run()?;
    Ok(())
}

fn handle_config(path: Option<std::path::PathBuf>, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = Config::load_from(path).context("loading configuration")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Input]");
                println!("  Max text length:    {}", config.input.max_text_length);
                println!(
                    "  Age range:          {}..={}",
                    config.input.min_age, config.input.max_age
                );
                println!("  Phone pattern:      {}", config.input.phone_pattern);
                println!();
                println!("[Display]");
                println!("  Clear lines:        {}", config.display.clear_lines);
                println!(
                    "  Pause after action: {}",
                    config.display.pause_after_action
                );
            }
        }
        ConfigCommand::Path => {
            println!(
                "{}",
                path.unwrap_or_else(Config::default_config_path).display()
            );
        }
        ConfigCommand::Validate { file } => {
            let path = file.or(path).unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
