//! One handler per CLI subcommand

pub mod add;
pub mod clear;
pub mod configure;
pub mod filter;
pub mod list;
pub mod show;
pub mod sync;
pub mod transfer;

use crate::QuoteGen;
use crate::config::Config;
use crate::sync::SyncReport;
use crate::utils::OutputStyle;
use crate::utils::error::AppResult;
use crate::utils::format::format_datetime;

pub(crate) fn open_app(config: Config) -> AppResult<QuoteGen> {
    QuoteGen::open(config)
}

/// Print a sync status line followed by any conflicts it resolved
pub(crate) fn print_sync_report(report: &SyncReport, with_time: bool) {
    let message = if with_time {
        format!("[{}] {}", format_datetime(&report.finished_at), report.message())
    } else {
        report.message()
    };
    OutputStyle::print_status(&message, report.is_ok());

    for conflict in report.conflicts() {
        println!(
            "   {} “{}”: {} → {}",
            OutputStyle::warning("conflict"),
            OutputStyle::content(&conflict.text),
            OutputStyle::muted(&conflict.local_category),
            OutputStyle::category(&conflict.remote_category)
        );
    }
}
