use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Import error: {0}")]
    Import(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Sync error: {0}")]
    Sync(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

pub enum FlowResult {
    EmptyList { item_type: String },
    Cancelled(String),
    Success(String),
}

pub fn report_error(err: &AppError) {
    match err {
        AppError::Validation(msg) => {
            println!("✋ {}", OutputStyle::warning(msg));
        }
        AppError::Import(msg) => {
            println!("📂 {}", OutputStyle::error(&format!("Import failed: {}", msg)));
        }
        AppError::Storage(msg) => {
            println!(
                "💾 {}",
                OutputStyle::warning(&format!("Could not save quotes: {}", msg))
            );
        }
        AppError::Network(msg) => {
            println!("🌐 {}", OutputStyle::error(&format!("Network: {}", msg)));
        }
        AppError::Sync(msg) => {
            println!("⚠️  {}", OutputStyle::warning(&format!("Sync: {}", msg)));
        }
        AppError::Config(msg) | AppError::Io(msg) => {
            eprintln!("❌ {}", OutputStyle::error(msg));
        }
    }
}

pub fn handle_flow(flow: FlowResult) {
    match flow {
        FlowResult::EmptyList { item_type } => {
            let msg = format!("No {} found", item_type);
            println!("{}", OutputStyle::muted(&msg));
        }
        FlowResult::Cancelled(msg) => {
            println!("⏹️  {}", OutputStyle::muted(&msg));
        }
        FlowResult::Success(msg) => {
            println!("✅ {}", OutputStyle::success(&msg));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::Import("record 2 is missing `text`".into());
        assert_eq!(err.to_string(), "Import error: record 2 is missing `text`");
    }
}
