use crate::cli::{ExportArgs, ImportArgs};
use crate::config::Config;
use crate::core::transfer::{DEFAULT_EXPORT_FILE, ImportMode, write_export};
use crate::utils::error::AppResult;
use crate::utils::format::plural;
use crate::utils::output::{print_success, print_warning};
use std::path::PathBuf;

pub fn handle_export_command(config: Config, args: &ExportArgs) -> AppResult<()> {
    let app = super::open_app(config)?;
    let quotes = app.store().get();

    if quotes.is_empty() {
        print_warning("No quotes to export; writing an empty list");
    }

    let path = args
        .file
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE));
    write_export(quotes, &path)?;

    print_success(&format!(
        "Exported {} to {}",
        plural(quotes.len(), "quote"),
        path.display()
    ));
    Ok(())
}

pub async fn handle_import_command(config: Config, args: &ImportArgs) -> AppResult<()> {
    let mode = if args.replace {
        ImportMode::Replace
    } else {
        config.general.import_mode
    };
    let mut app = super::open_app(config)?;

    let outcome = app.import(&args.file, mode).await?;

    match mode {
        ImportMode::Merge => print_success(&format!(
            "Quotes imported successfully! {} new",
            plural(outcome.added, "quote")
        )),
        ImportMode::Replace => print_success(&format!(
            "Quotes imported successfully! Replaced list with {}",
            plural(outcome.added, "quote")
        )),
    }

    if let Some(report) = &outcome.sync {
        super::print_sync_report(report, false);
    }
    Ok(())
}
