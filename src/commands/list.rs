use crate::cli::{ListArgs, ListFormat};
use crate::config::Config;
use crate::core::data::stats;
use crate::core::filter::CategoryFilter;
use crate::utils::error::AppResult;
use crate::utils::output::DisplayFormatter;

pub fn handle_list_command(config: Config, args: &ListArgs) -> AppResult<()> {
    let app = super::open_app(config)?;

    if args.categories {
        DisplayFormatter::print_categories(&app.category_options(), &app.active_filter());
        return Ok(());
    }

    if args.stats {
        DisplayFormatter::print_stats(&stats(app.store().get()));
        return Ok(());
    }

    let filter = args
        .category
        .as_deref()
        .map(CategoryFilter::parse)
        .unwrap_or_default();

    let quotes: Vec<_> = filter
        .apply(app.store().get())
        .into_iter()
        .cloned()
        .collect();

    let format = args.format.as_ref().unwrap_or(&ListFormat::Simple);
    DisplayFormatter::format_list(&quotes, format)
}
