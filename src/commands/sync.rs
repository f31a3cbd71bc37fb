use crate::cli::WatchArgs;
use crate::config::Config;
use crate::sync::PushOutcome;
use crate::utils::OutputStyle;
use crate::utils::error::{AppError, AppResult};
use crate::utils::format::plural;
use crate::utils::output::{print_success, print_warning};
use std::time::Duration;

fn no_remote() -> AppError {
    AppError::Sync("No remote configured. Add a [remote] section to your config.".to_string())
}

pub async fn handle_sync_command(config: Config) -> AppResult<()> {
    let mut app = super::open_app(config)?;

    println!("🔄 Syncing with server...");
    let report = app.sync_now().await.ok_or_else(no_remote)?;
    super::print_sync_report(&report, false);
    Ok(())
}

pub async fn handle_watch_command(config: Config, args: &WatchArgs) -> AppResult<()> {
    let every = match (args.interval, &config.remote) {
        (_, None) => return Err(no_remote()),
        (Some(secs), _) => Duration::from_secs(secs),
        (None, Some(remote)) => remote.sync_interval(),
    };
    let mut app = super::open_app(config)?;

    println!(
        "👀 Syncing every {}. Press {} to stop.",
        plural(every.as_secs() as usize, "second"),
        OutputStyle::header("Ctrl+C")
    );

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "could not listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    let runs = app
        .watch(every, shutdown, |report| super::print_sync_report(report, true))
        .await?;

    println!("{}", OutputStyle::muted(&format!("Stopped after {}", plural(runs, "sync"))));
    Ok(())
}

pub async fn handle_push_command(config: Config) -> AppResult<()> {
    let app = super::open_app(config)?;

    if app.store().is_empty() {
        print_warning("No quotes found locally. Nothing to push.");
        return Ok(());
    }

    println!("📤 Posting {} to server...", plural(app.store().len(), "quote"));
    match app.push_all().await.ok_or_else(no_remote)? {
        PushOutcome::Pushed(count) => {
            print_success(&format!("Posted {} to server", plural(count, "quote")));
        }
        PushOutcome::Failed(reason) => {
            OutputStyle::print_status(&format!("Push failed: {}", reason), false);
        }
        PushOutcome::Skipped => {}
    }
    Ok(())
}
