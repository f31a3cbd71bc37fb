use anyhow::Result;
use clap::Parser;

use quotegen::cli::{Cli, Commands, ShowArgs};
use quotegen::config::Config;
use quotegen::logging;
use quotegen::utils::error::report_error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.debug);

    let config_path = cli.config.clone().unwrap_or_else(Config::config_file_path);
    let config = Config::load_custom(&config_path)?;
    if !config.general.color {
        colored::control::set_override(false);
    }

    // no subcommand behaves like opening the page: restore or pick a quote
    let command = cli.command.unwrap_or(Commands::Show(ShowArgs::default()));

    if let Err(e) = command.execute(config, &config_path).await {
        report_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
