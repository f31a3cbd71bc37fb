pub mod agent;
pub mod http;

pub use agent::{PushOutcome, SyncAgent, SyncReport, SyncStatus};
pub use http::HttpRemote;

use crate::core::data::Quote;
use crate::utils::error::AppResult;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// A remote quote collection
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Fetch the remote collection as generic records
    async fn fetch(&self) -> AppResult<Vec<Value>>;

    /// Post quotes to the remote collection
    async fn push(&self, quotes: &[Quote]) -> AppResult<()>;
}

const TEXT_FIELDS: [&str; 4] = ["title", "text", "quote", "body"];

/// Map one generic remote record into a quote.
///
/// Text comes from the first non-empty of `title`, `text`, `quote`, `body`;
/// category falls back to `default_category`. Records without text map to `None`.
pub fn quote_from_record(record: &Value, default_category: &str) -> Option<Quote> {
    let fields = record.as_object()?;

    let text = TEXT_FIELDS
        .iter()
        .find_map(|name| non_empty_str(fields, name))?;
    let category = non_empty_str(fields, "category").unwrap_or(default_category);

    Quote::new(text, category).ok()
}

pub fn quotes_from_records(records: &[Value], default_category: &str) -> Vec<Quote> {
    records
        .iter()
        .filter_map(|record| quote_from_record(record, default_category))
        .collect()
}

fn non_empty_str<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    fields
        .get(name)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
