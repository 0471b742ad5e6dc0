mod cli;
mod config;
mod display;
mod error;
mod logging;
mod models;
mod ranking;
mod renderer;
mod store;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::Request;
use crate::config::{ColorChoice, OutputFormat, Overrides, Settings};
use crate::error::Result;

#[derive(Parser)]
#[command(name = "tagc")]
#[command(about = "Bookmark shell commands with tags and find them by tag overlap", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    subcommand: Option<Commands>,

    /// Search stored commands by tags instead of storing one
    #[arg(short = 's', long)]
    search: bool,

    /// Command text to store
    #[arg(short = 'c', long = "command", value_name = "TEXT")]
    command_text: Option<String>,

    /// Tags separated by ','
    #[arg(short = 't', long, value_name = "TAG,TAG,...")]
    tags: Option<String>,

    /// Free-text info attached to the stored command
    #[arg(short = 'i', long, value_name = "TEXT")]
    info: Option<String>,

    /// Path to the command store (defaults to ~/.tagc.commands.txt)
    #[arg(long, env = "TAGC_STORE", value_name = "PATH")]
    store: Option<PathBuf>,

    /// Path to config file (defaults to ~/.tagc.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format for search results
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// When to colorize Markdown output
    #[arg(long, value_enum)]
    color: Option<ColorChoice>,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize ~/.tagc.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        tracing::debug!(error = ?e, "invocation failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(Commands::Config { command }) = cli.subcommand {
        return match command {
            ConfigCommands::Init { path } => cli::config::init(path),
        };
    }

    let request = Request::from_flags(cli.search, cli.command_text, cli.tags, cli.info)?;

    let file_config = match cli.config {
        Some(path) => config::load(&path)?,
        None => config::load_or_default(&config::default_path())?,
    };
    let settings = Settings::resolve(
        file_config,
        Overrides {
            store_file: cli.store,
            format: cli.format,
            color: cli.color,
        },
    );
    tracing::debug!(?settings, "resolved settings");

    match request {
        Request::Search { query } => cli::search::run(&settings, &query),
        Request::Store {
            command,
            tags,
            info,
        } => cli::store::run(&settings, command, &tags, info),
    }
}
