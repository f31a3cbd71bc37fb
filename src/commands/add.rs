use crate::cli::AddArgs;
use crate::config::Config;
use crate::sync::PushOutcome;
use crate::utils::error::{AppResult, FlowResult, handle_flow, report_error};
use crate::utils::input::prompt_input;
use crate::utils::output::{OutputStyle, print_success, print_warning};

pub async fn handle_add_command(config: Config, args: &AddArgs) -> AppResult<()> {
    let mut app = super::open_app(config)?;

    let text = match &args.text {
        Some(text) => text.clone(),
        None => match prompt_input(&format!("{}: ", OutputStyle::label("Quote")))? {
            Some(text) => text,
            None => {
                handle_flow(FlowResult::Cancelled("Add cancelled".to_string()));
                return Ok(());
            }
        },
    };

    let category = match &args.category {
        Some(category) => category.clone(),
        None => match prompt_input(&format!("{}: ", OutputStyle::label("Category")))? {
            Some(category) => category,
            None => {
                handle_flow(FlowResult::Cancelled("Add cancelled".to_string()));
                return Ok(());
            }
        },
    };

    let outcome = app.add_quote(&text, &category).await?;

    print_success("Quote added!");
    OutputStyle::print_quote_card(&outcome.quote);

    if let Some(err) = &outcome.save_error {
        report_error(err);
    }

    match outcome.push {
        Some(PushOutcome::Pushed(_)) => {
            println!("📤 {}", OutputStyle::muted("Quote posted to server"));
        }
        Some(PushOutcome::Failed(reason)) => {
            print_warning(&format!("Could not post quote to server: {}", reason));
        }
        Some(PushOutcome::Skipped) | None => {}
    }

    Ok(())
}
