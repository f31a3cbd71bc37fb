use crate::commands::{add, clear, configure, filter, list, show, sync, transfer};
use crate::config::Config;
use crate::utils::error::AppResult;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "quotegen")]
#[command(about = "A random quote generator with category filters and remote sync")]
#[command(version)]
pub struct Cli {
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Commands {
    pub async fn execute(self, config: Config, config_path: &Path) -> AppResult<()> {
        match self {
            Commands::Show(args) => show::handle_show_command(config, &args),
            Commands::Next => show::handle_next_command(config),
            Commands::Add(args) => add::handle_add_command(config, &args).await,
            Commands::List(args) => list::handle_list_command(config, &args),
            Commands::Filter(args) => filter::handle_filter_command(config, &args),
            Commands::Export(args) => transfer::handle_export_command(config, &args),
            Commands::Import(args) => transfer::handle_import_command(config, &args).await,
            Commands::Sync => sync::handle_sync_command(config).await,
            Commands::Watch(args) => sync::handle_watch_command(config, &args).await,
            Commands::Push => sync::handle_push_command(config).await,
            Commands::Clear(args) => clear::handle_clear_command(config, &args),
            Commands::Config(args) => configure::handle_config_command(config, config_path, args.command),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the last quote of this session, or a random one
    Show(ShowArgs),

    /// Show a new random quote from the current category
    Next,

    /// Add a new quote
    Add(AddArgs),

    /// List quotes
    List(ListArgs),

    /// Select the category filter, or list the choices
    Filter(FilterArgs),

    /// Export quotes to a JSON file
    Export(ExportArgs),

    /// Import quotes from a JSON file
    Import(ImportArgs),

    /// Sync quotes with the remote server once
    Sync,

    /// Keep syncing with the remote server on an interval
    Watch(WatchArgs),

    /// Post all local quotes to the remote server
    Push,

    /// Remove every quote
    Clear(ClearArgs),

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args, Default)]
pub struct ShowArgs {
    #[arg(long, help = "Forget the last shown quote and start a new session")]
    pub new_session: bool,
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(short = 't', long)]
    pub text: Option<String>,

    #[arg(short = 'c', long)]
    pub category: Option<String>,
}

#[derive(Args)]
pub struct ListArgs {
    #[arg(short = 'c', long)]
    pub category: Option<String>,

    #[arg(short, long)]
    pub format: Option<ListFormat>,

    #[arg(long)]
    pub stats: bool,

    #[arg(long, help = "Show all available categories")]
    pub categories: bool,
}

#[derive(Args)]
pub struct FilterArgs {
    #[arg(help = "Category to show, or \"all\"")]
    pub category: Option<String>,
}

#[derive(Args)]
pub struct ExportArgs {
    #[arg(help = "File to export to (default: quotes.json)")]
    pub file: Option<PathBuf>,
}

#[derive(Args)]
pub struct ImportArgs {
    #[arg(help = "JSON file to import from")]
    pub file: PathBuf,

    #[arg(long, help = "Replace the current quotes instead of merging")]
    pub replace: bool,
}

#[derive(Args)]
pub struct WatchArgs {
    #[arg(
        short,
        long,
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Seconds between syncs (overrides config)"
    )]
    pub interval: Option<u64>,
}

#[derive(Args)]
pub struct ClearArgs {
    #[arg(short, long)]
    pub force: bool,
}

#[derive(clap::ValueEnum, Clone)]
pub enum ListFormat {
    Simple,
    Detailed,
    Json,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Reset configuration to defaults
    Reset,
}
