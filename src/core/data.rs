//! Core data structures for quote management

use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub category: String,
}

/// Statistics about the quote list
#[derive(Debug, Default)]
pub struct QuoteStats {
    pub total: usize,
    pub per_category: BTreeMap<String, usize>,
}

impl Quote {
    /// Build a validated quote; both fields are trimmed and must be non-empty
    pub fn new(text: impl AsRef<str>, category: impl AsRef<str>) -> AppResult<Self> {
        let text = text.as_ref().trim();
        let category = category.as_ref().trim();

        if text.is_empty() && category.is_empty() {
            return Err(AppError::Validation(
                "Please enter both a quote and a category.".to_string(),
            ));
        }
        if text.is_empty() {
            return Err(AppError::Validation("Quote text cannot be empty.".to_string()));
        }
        if category.is_empty() {
            return Err(AppError::Validation("Quote category cannot be empty.".to_string()));
        }

        Ok(Self {
            text: text.to_string(),
            category: category.to_string(),
        })
    }

    /// Re-run validation on a quote that came from untrusted input
    pub fn validated(self) -> AppResult<Self> {
        Self::new(&self.text, &self.category)
    }

    /// Same `(text, category)` pair, category compared case-insensitively
    pub fn same_identity(&self, other: &Quote) -> bool {
        self.text == other.text && same_category(&self.category, &other.category)
    }
}

pub(crate) fn same_category(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// The built-in list used when nothing valid is persisted
pub fn default_quotes() -> Vec<Quote> {
    [
        (
            "The only limit to our realization of tomorrow is our doubts of today.",
            "Motivation",
        ),
        (
            "Success is not final, failure is not fatal: it is the courage to continue that counts.",
            "Inspiration",
        ),
        (
            "Do not wait for leaders; do it alone, person to person.",
            "Action",
        ),
    ]
    .into_iter()
    .map(|(text, category)| Quote {
        text: text.to_string(),
        category: category.to_string(),
    })
    .collect()
}

/// Count quotes per trimmed category
pub fn stats(quotes: &[Quote]) -> QuoteStats {
    let mut per_category = BTreeMap::new();
    for quote in quotes {
        *per_category
            .entry(quote.category.trim().to_string())
            .or_insert(0) += 1;
    }
    QuoteStats {
        total: quotes.len(),
        per_category,
    }
}
