//! The authoritative quote list and its persistence

use crate::core::data::{Quote, default_quotes, same_category};
use crate::storage::{KeyValueStore, QUOTES_KEY};
use crate::utils::error::{AppError, AppResult};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A remote quote that shared its text with a local one but not its category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub text: String,
    pub local_category: String,
    pub remote_category: String,
}

/// Outcome of merging a remote list into the store
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MergeReport {
    pub added: usize,
    pub conflicts: Vec<Conflict>,
}

impl MergeReport {
    pub fn is_noop(&self) -> bool {
        self.added == 0 && self.conflicts.is_empty()
    }
}

pub struct QuoteStore {
    quotes: Vec<Quote>,
    medium: Arc<dyn KeyValueStore>,
}

impl QuoteStore {
    /// Restore the persisted list, falling back to the defaults.
    ///
    /// Never fails: an absent or unreadable value yields the default list,
    /// and invalid entries inside a readable list are dropped.
    pub fn load(medium: Arc<dyn KeyValueStore>) -> Self {
        let quotes = match medium.get(QUOTES_KEY) {
            Ok(Some(raw)) => parse_persisted(&raw).unwrap_or_else(|| {
                warn!("persisted quotes are corrupt, using defaults");
                default_quotes()
            }),
            Ok(None) => {
                debug!("no persisted quotes, using defaults");
                default_quotes()
            }
            Err(e) => {
                warn!(error = %e, "could not read persisted quotes, using defaults");
                default_quotes()
            }
        };

        debug!(count = quotes.len(), "quote store loaded");
        Self { quotes, medium }
    }

    /// An empty store over `medium`; nothing is read or written
    pub fn empty(medium: Arc<dyn KeyValueStore>) -> Self {
        Self {
            quotes: Vec::new(),
            medium,
        }
    }

    pub fn get(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Overwrite the persisted representation with the in-memory list
    pub fn save(&self) -> AppResult<()> {
        let payload = serde_json::to_string(&self.quotes)
            .map_err(|e| AppError::Storage(format!("Failed to serialize quotes: {}", e)))?;
        self.medium.set(QUOTES_KEY, &payload).inspect_err(|e| {
            warn!(error = %e, "persisting quotes failed");
        })
    }

    /// Validate and append one quote, then persist.
    ///
    /// On a storage error the quote stays in memory.
    pub fn add(&mut self, quote: Quote) -> AppResult<&Quote> {
        let quote = quote.validated()?;
        info!(category = %quote.category, "adding quote");
        self.quotes.push(quote);
        self.save()?;
        Ok(&self.quotes[self.quotes.len() - 1])
    }

    /// Replace the whole list, then persist
    pub fn replace(&mut self, quotes: Vec<Quote>) -> AppResult<()> {
        info!(count = quotes.len(), "replacing quote list");
        self.quotes = quotes;
        self.save()
    }

    /// Append quotes whose `(text, category)` identity is new; returns how many were added
    pub fn extend_unique(&mut self, quotes: Vec<Quote>) -> AppResult<usize> {
        let mut added = 0;
        for quote in quotes {
            if !self.quotes.iter().any(|q| q.same_identity(&quote)) {
                self.quotes.push(quote);
                added += 1;
            }
        }
        debug!(added, "extended quote list");
        self.save()?;
        Ok(added)
    }

    /// Merge remote quotes keyed by text; the remote category wins on conflict.
    ///
    /// The in-memory merge always completes. The report is returned together
    /// with the result of persisting it.
    pub fn merge(&mut self, remote: Vec<Quote>) -> (MergeReport, AppResult<()>) {
        let mut report = MergeReport::default();

        for incoming in remote {
            // the text may be stored under several categories after an import
            let already_known = self.quotes.iter().any(|q| {
                q.text == incoming.text && same_category(&q.category, &incoming.category)
            });
            if already_known {
                continue;
            }

            match self.quotes.iter_mut().find(|q| q.text == incoming.text) {
                None => {
                    self.quotes.push(incoming);
                    report.added += 1;
                }
                Some(local) => {
                    report.conflicts.push(Conflict {
                        text: local.text.clone(),
                        local_category: std::mem::replace(
                            &mut local.category,
                            incoming.category.clone(),
                        ),
                        remote_category: incoming.category,
                    });
                }
            }
        }

        info!(
            added = report.added,
            conflicts = report.conflicts.len(),
            "merged remote quotes"
        );

        let saved = if report.is_noop() { Ok(()) } else { self.save() };
        (report, saved)
    }

    /// Remove every quote, then persist the empty list
    pub fn clear(&mut self) -> AppResult<()> {
        info!(count = self.quotes.len(), "clearing quote list");
        self.quotes.clear();
        self.save()
    }
}

/// `None` when the value is not a JSON array at all
fn parse_persisted(raw: &str) -> Option<Vec<Quote>> {
    let Value::Array(items) = serde_json::from_str::<Value>(raw).ok()? else {
        return None;
    };

    let total = items.len();
    let quotes: Vec<Quote> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<Quote>(item).ok())
        .filter_map(|quote| quote.validated().ok())
        .collect();

    if quotes.len() < total {
        debug!(dropped = total - quotes.len(), "dropped invalid persisted quotes");
    }
    Some(quotes)
}
