use crate::cli::ClearArgs;
use crate::config::Config;
use crate::utils::error::{AppResult, FlowResult, handle_flow};
use crate::utils::format::plural;
use crate::utils::input::prompt_yes_no;

pub fn handle_clear_command(config: Config, args: &ClearArgs) -> AppResult<()> {
    let mut app = super::open_app(config)?;
    let count = app.store().len();

    if count == 0 {
        handle_flow(FlowResult::EmptyList {
            item_type: "quotes".to_string(),
        });
        return Ok(());
    }

    if !args.force && !prompt_yes_no(&format!("Delete all {}?", plural(count, "quote")))? {
        handle_flow(FlowResult::Cancelled("Clear cancelled".to_string()));
        return Ok(());
    }

    app.store_mut().clear()?;
    handle_flow(FlowResult::Success(format!("Removed {}", plural(count, "quote"))));
    Ok(())
}
