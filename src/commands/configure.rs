use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils::error::AppResult;
use crate::utils::output::{OutputStyle, print_success};
use std::path::Path;

pub fn handle_config_command(
    config: Config,
    config_path: &Path,
    command: Option<ConfigCommands>,
) -> AppResult<()> {
    match command {
        Some(ConfigCommands::Show) | None => handle_show_command(&config, config_path),
        Some(ConfigCommands::Path) => {
            println!("{}", config_path.display());
            Ok(())
        }
        Some(ConfigCommands::Reset) => handle_reset_command(config_path),
    }
}

fn handle_show_command(config: &Config, config_path: &Path) -> AppResult<()> {
    OutputStyle::print_header("⚙️  quotegen Configuration");
    println!("{}", OutputStyle::muted(&config_path.display().to_string()));

    println!("General:");
    println!("  Data dir: {}", config.general.data_dir.display());
    println!("  Session dir: {}", config.general.session_dir.display());
    println!("  Color: {}", config.general.color);
    println!("  Import mode: {:?}", config.general.import_mode);

    match &config.remote {
        Some(remote) => {
            println!("Remote:");
            println!("  URL: {}", remote.url);
            println!("  Sync interval: {}s", remote.sync_interval_secs);
            println!("  Default category: {}", remote.default_category);
            println!("  Push on add: {}", remote.push_on_add);
            println!("  Sync on import: {}", remote.sync_on_import);
        }
        None => println!("Remote: {}", OutputStyle::muted("not configured")),
    }

    Ok(())
}

fn handle_reset_command(config_path: &Path) -> AppResult<()> {
    Config::default().save_to(config_path)?;
    print_success(&format!("Configuration reset to defaults at {}", config_path.display()));
    Ok(())
}
