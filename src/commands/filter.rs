use crate::cli::FilterArgs;
use crate::config::Config;
use crate::core::filter::CategoryFilter;
use crate::utils::OutputStyle;
use crate::utils::error::AppResult;
use crate::utils::output::{DisplayFormatter, print_warning};

pub fn handle_filter_command(config: Config, args: &FilterArgs) -> AppResult<()> {
    let app = super::open_app(config)?;
    let options = app.category_options();

    let Some(requested) = &args.category else {
        DisplayFormatter::print_categories(&options, &app.active_filter());
        return Ok(());
    };

    let filter = match CategoryFilter::parse(requested) {
        CategoryFilter::All => CategoryFilter::All,
        CategoryFilter::Category(category) => {
            // use the stored spelling of the category
            match options
                .iter()
                .skip(1)
                .find(|option| option.eq_ignore_ascii_case(&category))
            {
                Some(known) => CategoryFilter::Category(known.clone()),
                None => {
                    print_warning(&format!("Unknown category “{}”", category));
                    DisplayFormatter::print_categories(&options, &app.active_filter());
                    return Ok(());
                }
            }
        }
    };

    let shown = app.select_category(&filter)?;
    println!("{}", OutputStyle::muted(&format!("Filter set to “{}”", filter)));
    OutputStyle::print_shown(&shown);
    Ok(())
}
