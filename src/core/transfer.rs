//! JSON export and validated import

use crate::core::data::Quote;
use crate::core::store::QuoteStore;
use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::info;

pub const DEFAULT_EXPORT_FILE: &str = "quotes.json";

/// How imported quotes are combined with the existing list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImportMode {
    #[default]
    Merge,
    Replace,
}

/// Pretty-printed JSON array of the quotes
pub fn export_json(quotes: &[Quote]) -> AppResult<String> {
    serde_json::to_string_pretty(quotes)
        .map_err(|e| AppError::Io(format!("Failed to serialize quotes: {}", e)))
}

pub fn write_export(quotes: &[Quote], path: &Path) -> AppResult<()> {
    let payload = export_json(quotes)?;
    std::fs::write(path, payload)
        .map_err(|e| AppError::Io(format!("Failed to write {}: {}", path.display(), e)))?;
    info!(count = quotes.len(), path = %path.display(), "exported quotes");
    Ok(())
}

/// Parse an import payload; any malformed record rejects the whole payload
pub fn parse_import(payload: &str) -> AppResult<Vec<Quote>> {
    let value: Value = serde_json::from_str(payload)
        .map_err(|e| AppError::Import(format!("File is not valid JSON: {}", e)))?;

    let Value::Array(records) = value else {
        return Err(AppError::Import(
            "Expected a JSON array of quotes".to_string(),
        ));
    };

    records
        .iter()
        .enumerate()
        .map(|(i, record)| parse_record(i + 1, record))
        .collect()
}

fn parse_record(position: usize, record: &Value) -> AppResult<Quote> {
    let Value::Object(fields) = record else {
        return Err(AppError::Import(format!(
            "Record {} is not an object",
            position
        )));
    };

    Quote::new(
        string_field(fields, position, "text")?,
        string_field(fields, position, "category")?,
    )
}

fn string_field<'a>(
    fields: &'a serde_json::Map<String, Value>,
    position: usize,
    name: &str,
) -> AppResult<&'a str> {
    match fields.get(name) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.as_str()),
        Some(Value::String(_)) => Err(AppError::Import(format!(
            "Record {} has an empty `{}`",
            position, name
        ))),
        Some(_) => Err(AppError::Import(format!(
            "Record {} has a non-string `{}`",
            position, name
        ))),
        None => Err(AppError::Import(format!(
            "Record {} is missing `{}`",
            position, name
        ))),
    }
}

/// Read, validate and apply an import file; returns how many quotes were added
pub fn import_file(store: &mut QuoteStore, path: &Path, mode: ImportMode) -> AppResult<usize> {
    let payload = std::fs::read_to_string(path)
        .map_err(|e| AppError::Import(format!("Failed to read {}: {}", path.display(), e)))?;
    import_payload(store, &payload, mode)
}

pub fn import_payload(store: &mut QuoteStore, payload: &str, mode: ImportMode) -> AppResult<usize> {
    let quotes = parse_import(payload)?;
    let count = quotes.len();

    let added = match mode {
        ImportMode::Merge => store.extend_unique(quotes)?,
        ImportMode::Replace => {
            store.replace(quotes)?;
            count
        }
    };

    info!(?mode, parsed = count, added, "imported quotes");
    Ok(added)
}
