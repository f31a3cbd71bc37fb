use crate::cli::ShowArgs;
use crate::config::Config;
use crate::core::filter::CategoryFilter;
use crate::utils::OutputStyle;
use crate::utils::error::AppResult;

pub fn handle_show_command(config: Config, args: &ShowArgs) -> AppResult<()> {
    let app = super::open_app(config)?;

    if args.new_session {
        app.viewer().forget();
    }

    print_filter_hint(&app.active_filter());
    OutputStyle::print_shown(&app.restore());
    Ok(())
}

pub fn handle_next_command(config: Config) -> AppResult<()> {
    let app = super::open_app(config)?;

    print_filter_hint(&app.active_filter());
    OutputStyle::print_shown(&app.next_quote());
    Ok(())
}

fn print_filter_hint(filter: &CategoryFilter) {
    if let CategoryFilter::Category(category) = filter {
        println!(
            "{}",
            OutputStyle::muted(&format!("Showing quotes from “{}” (quotegen filter all to reset)", category))
        );
    }
}
