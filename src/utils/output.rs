use crate::cli::ListFormat;
use crate::core::data::{Quote, QuoteStats};
use crate::core::filter::CategoryFilter;
use crate::core::view::Shown;
use crate::utils::error::{AppError, AppResult};
use crate::utils::format::truncate_string;
use colored::*;

pub struct OutputStyle;

impl OutputStyle {
    pub fn quote_text(text: &str) -> ColoredString {
        text.bright_green().italic()
    }

    pub fn content(text: &str) -> ColoredString {
        text.clear()
    }

    pub fn category(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn separator() -> String {
        "─".repeat(50)
    }

    pub fn header_separator() -> String {
        "═".repeat(50)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::title(title));
        println!("{}", Self::header_separator());
    }

    pub fn print_field_colored(label: &str, value: &str, color_fn: impl Fn(&str) -> ColoredString) {
        println!("{:>12}: {}", Self::label(label), color_fn(value));
    }

    /// Print the quote display area
    pub fn print_shown(shown: &Shown) {
        match shown {
            Shown::Quote(quote) => Self::print_quote_card(quote),
            Shown::Empty => println!("{}", Self::muted(Shown::PLACEHOLDER)),
        }
    }

    pub fn print_quote_card(quote: &Quote) {
        println!();
        println!("  “{}”", Self::quote_text(&quote.text));
        println!("      - {}", Self::category(&quote.category));
        println!();
    }

    pub fn format_quote_line(quote: &Quote) -> String {
        format!(
            "{} {}",
            Self::category(&format!("[{}]", quote.category)),
            Self::content(&truncate_string(&quote.text, 100))
        )
    }

    /// Print the transient sync status line
    pub fn print_status(message: &str, ok: bool) {
        if ok {
            println!("🔄 {}", Self::info(message));
        } else {
            println!("⚠️  {}", Self::warning(message));
        }
    }
}

pub fn print_quote_count(count: usize) {
    if count == 0 {
        println!("{}", OutputStyle::muted("No quotes found."));
    } else {
        println!(
            "💬 {} ({} found)",
            OutputStyle::header("Quotes"),
            OutputStyle::info(&count.to_string())
        );
    }
}

pub fn print_warning(message: &str) {
    println!("⚠️  {}", OutputStyle::warning(message));
}

pub fn print_success(message: &str) {
    println!("✅ {}", OutputStyle::success(message));
}

/// Display formatter for different output formats
pub struct DisplayFormatter;

impl DisplayFormatter {
    /// Format quotes list according to the specified format
    pub fn format_list(quotes: &[Quote], format: &ListFormat) -> AppResult<()> {
        if quotes.is_empty() {
            crate::utils::handle_flow(crate::utils::FlowResult::EmptyList {
                item_type: "quotes matching your criteria".to_string(),
            });
            return Ok(());
        }

        match format {
            ListFormat::Simple => Self::print_simple_list(quotes),
            ListFormat::Detailed => Self::print_detailed_list(quotes),
            ListFormat::Json => Self::print_json_list(quotes)?,
        }

        Ok(())
    }

    /// Print category options with the active selection marked
    pub fn print_categories(options: &[String], active: &CategoryFilter) {
        println!("📁 Available Categories ({})", options.len().saturating_sub(1));
        println!("=========================");
        for option in options {
            let filter = CategoryFilter::parse(option);
            if &filter == active {
                println!("  {} {}", OutputStyle::success("●"), OutputStyle::header(option));
            } else {
                println!("  ○ {}", option);
            }
        }
    }

    pub fn print_stats(stats: &QuoteStats) {
        OutputStyle::print_header("📊 Quote Statistics");

        OutputStyle::print_field_colored("Total quotes", &stats.total.to_string(), OutputStyle::info);
        OutputStyle::print_field_colored(
            "Categories",
            &stats.per_category.len().to_string(),
            OutputStyle::info,
        );

        if !stats.per_category.is_empty() {
            println!("\n📁 {}:", OutputStyle::header("Quotes per category"));
            let mut sorted: Vec<_> = stats.per_category.iter().collect();
            sorted.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

            for (category, count) in sorted {
                println!("  {}: {}", OutputStyle::category(category), OutputStyle::info(&count.to_string()));
            }
        }
    }

    fn print_simple_list(quotes: &[Quote]) {
        print_quote_count(quotes.len());
        println!("{}", OutputStyle::separator());

        for quote in quotes {
            println!("{}", OutputStyle::format_quote_line(quote));
        }
    }

    fn print_detailed_list(quotes: &[Quote]) {
        OutputStyle::print_header("💬 Detailed Quote List");

        for (i, quote) in quotes.iter().enumerate() {
            println!("\n{}.", i + 1);
            OutputStyle::print_field_colored("Quote", &quote.text, OutputStyle::quote_text);
            OutputStyle::print_field_colored("Category", &quote.category, OutputStyle::category);

            if i < quotes.len() - 1 {
                println!("{}", OutputStyle::separator());
            }
        }
    }

    fn print_json_list(quotes: &[Quote]) -> AppResult<()> {
        let json = serde_json::to_string_pretty(quotes)
            .map_err(|e| AppError::Io(format!("Failed to serialize quotes to JSON: {}", e)))?;
        println!("{}", json);
        Ok(())
    }
}
