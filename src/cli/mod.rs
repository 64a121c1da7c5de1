//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod theme_list;

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;

use crate::cli::theme_list::list_themes;
use crate::core::app::AppInitConfig;
use crate::core::config::{path_display, Config};
use crate::ui::chat_loop::run_chat;
use crate::utils::color::detect_color_depth;
use crate::utils::logging::init_file_logging;

pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_DESCRIBE"),
    ")"
);

#[derive(Parser)]
#[command(name = "pulsechat")]
#[command(version = VERSION)]
#[command(about = "A terminal chat demo with a live network visualizer")]
#[command(
    long_about = "PulseChat is a full-screen terminal chat demo. Above the conversation, a \
layered network of nodes and edges animates with travelling pulses. Replies are simulated \
locally; no network access is needed.\n\n\
Controls:\n\
  Enter             Send the message\n\
  Alt+Enter         Insert a newline\n\
  Up/Down/PgUp/PgDn Scroll through chat history\n\
  Ctrl+S            Open or close the settings drawer\n\
  Ctrl+T            Toggle light/dark theme\n\
  Ctrl+L            Clear the conversation\n\
  Ctrl+C            Quit the application\n\n\
Environment Variables:\n\
  PULSECHAT_LOG     Log filter used with --log (default: info)\n\
  PULSECHAT_COLOR   Force color depth: truecolor, 256 or 16"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read configuration from this file instead of the default location
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Theme to start with (overrides the configured theme)
    #[arg(short = 't', long, global = true, value_name = "THEME")]
    pub theme: Option<String>,

    /// Fixed seed for the visualizer and simulated replies
    #[arg(short = 's', long, global = true, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Write diagnostic logs to this file
    #[arg(short = 'l', long, global = true, value_name = "FILE")]
    pub log: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the chat interface (default)
    Chat,
    /// Print the effective configuration
    Config,
    /// List the bundled themes
    Themes,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    tokio::runtime::Runtime::new()?.block_on(async_main(args))
}

/// Seed from the command line, then the config file, then the OS.
fn resolve_seed(cli_seed: Option<u64>, config: &Config) -> Result<u64, Box<dyn Error>> {
    if let Some(seed) = cli_seed.or(config.seed) {
        return Ok(seed);
    }
    let mut bytes = [0u8; 8];
    getrandom::fill(&mut bytes).map_err(|e| format!("failed to gather a random seed: {e}"))?;
    Ok(u64::from_le_bytes(bytes))
}

fn print_config(config: &Config, override_path: Option<&Path>) {
    let location = match override_path {
        Some(path) => path_display(path),
        None => match Config::get_config_path() {
            Ok(path) => path_display(path),
            Err(e) => format!("(unavailable: {e})"),
        },
    };
    println!("Config file: {location}\n");
    config.print_all();
}

async fn async_main(args: Args) -> Result<(), Box<dyn Error>> {
    if let Some(log_path) = args.log.as_deref() {
        init_file_logging(log_path)?;
    }

    let config = Config::load(args.config.as_deref())?;

    match args.command.unwrap_or(Commands::Chat) {
        Commands::Config => {
            print_config(&config, args.config.as_deref());
            Ok(())
        }
        Commands::Themes => {
            list_themes(&config);
            Ok(())
        }
        Commands::Chat => {
            let seed = resolve_seed(args.seed, &config)?;
            info!(version = VERSION, seed, "starting chat");
            run_chat(AppInitConfig {
                config,
                theme: args.theme,
                seed,
                color_depth: detect_color_depth(),
            })
            .await
        }
    }
}

#[cfg(test)]
mod tests;
