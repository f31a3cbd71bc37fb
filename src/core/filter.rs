//! Category index and the persisted category filter

use crate::core::data::{Quote, same_category};
use crate::storage::{KeyValueStore, SELECTED_CATEGORY_KEY};
use crate::utils::error::{AppError, AppResult};
use std::sync::Arc;
use tracing::{debug, warn};

pub const ALL_CATEGORIES: &str = "all";

/// Distinct, trimmed, non-empty categories in sorted order
pub fn categories(quotes: &[Quote]) -> Vec<String> {
    let mut categories: Vec<String> = quotes
        .iter()
        .map(|q| q.category.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();
    categories.sort();
    categories.dedup();
    categories
}

/// Filter choices: "all" followed by every category
pub fn options(quotes: &[Quote]) -> Vec<String> {
    std::iter::once(ALL_CATEGORIES.to_string())
        .chain(categories(quotes))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL_CATEGORIES) {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Category(category) => category,
        }
    }

    pub fn matches(&self, quote: &Quote) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => same_category(category, &quote.category),
        }
    }

    pub fn apply<'a>(&self, quotes: &'a [Quote]) -> Vec<&'a Quote> {
        quotes.iter().filter(|q| self.matches(q)).collect()
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's last filter choice, kept in durable storage
pub struct FilterState {
    medium: Arc<dyn KeyValueStore>,
}

impl FilterState {
    pub fn new(medium: Arc<dyn KeyValueStore>) -> Self {
        Self { medium }
    }

    /// The persisted filter; unreadable or absent means "all"
    pub fn current(&self) -> CategoryFilter {
        match self.medium.get(SELECTED_CATEGORY_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<String>(&raw) {
                Ok(category) => CategoryFilter::parse(&category),
                Err(e) => {
                    warn!(error = %e, "selected category is corrupt, showing all");
                    CategoryFilter::All
                }
            },
            Ok(None) => CategoryFilter::All,
            Err(e) => {
                warn!(error = %e, "could not read selected category");
                CategoryFilter::All
            }
        }
    }

    /// The persisted filter if its category still exists in `quotes`, else "all"
    pub fn effective(&self, quotes: &[Quote]) -> CategoryFilter {
        match self.current() {
            CategoryFilter::Category(category)
                if !quotes.iter().any(|q| same_category(&q.category, &category)) =>
            {
                debug!(%category, "selected category no longer exists, showing all");
                CategoryFilter::All
            }
            filter => filter,
        }
    }

    pub fn select(&self, filter: &CategoryFilter) -> AppResult<()> {
        debug!(filter = %filter, "selecting category filter");
        let raw = serde_json::to_string(filter.as_str())
            .map_err(|e| AppError::Storage(format!("Failed to serialize filter: {}", e)))?;
        self.medium.set(SELECTED_CATEGORY_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn quotes() -> Vec<Quote> {
        vec![
            Quote::new("a", "Motivation").unwrap(),
            Quote::new("b", "Life").unwrap(),
            Quote::new("c", " Motivation ").unwrap(),
            Quote {
                text: "d".to_string(),
                category: "   ".to_string(),
            },
        ]
    }

    #[test]
    fn test_categories_are_distinct_and_trimmed() {
        assert_eq!(categories(&quotes()), vec!["Life", "Motivation"]);
    }

    #[test]
    fn test_options_start_with_all() {
        assert_eq!(options(&quotes()), vec!["all", "Life", "Motivation"]);
        assert_eq!(options(&[]), vec!["all"]);
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!(CategoryFilter::parse("ALL"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse(" Life "),
            CategoryFilter::Category("Life".to_string())
        );
    }

    #[test]
    fn test_selecting_all_after_filter_restores_every_category() {
        let quotes = quotes();
        let state = FilterState::new(Arc::new(MemoryStore::new()));

        state.select(&CategoryFilter::parse("Motivation")).unwrap();
        let filtered = state.current().apply(&quotes);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|q| q.category.trim() == "Motivation"));

        state.select(&CategoryFilter::parse("all")).unwrap();
        assert_eq!(state.current().apply(&quotes).len(), quotes.len());
    }

    #[test]
    fn test_filter_survives_reload() {
        let medium: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        FilterState::new(medium.clone())
            .select(&CategoryFilter::Category("Life".to_string()))
            .unwrap();

        let reloaded = FilterState::new(medium);
        assert_eq!(reloaded.current(), CategoryFilter::Category("Life".to_string()));
    }

    #[test]
    fn test_selection_is_stored_as_json() {
        let medium: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        FilterState::new(medium.clone())
            .select(&CategoryFilter::Category("Life \"quoted\"".to_string()))
            .unwrap();

        let raw = medium.get(SELECTED_CATEGORY_KEY).unwrap().unwrap();
        assert_eq!(
            serde_json::from_str::<String>(&raw).unwrap(),
            "Life \"quoted\""
        );
    }

    #[test]
    fn test_corrupt_selection_means_all() {
        let medium = MemoryStore::new();
        medium.set(SELECTED_CATEGORY_KEY, "Life").unwrap();

        assert_eq!(FilterState::new(Arc::new(medium)).current(), CategoryFilter::All);
    }

    #[test]
    fn test_effective_falls_back_when_category_vanished() {
        let state = FilterState::new(Arc::new(MemoryStore::new()));
        state.select(&CategoryFilter::Category("Gone".to_string())).unwrap();

        assert_eq!(state.effective(&quotes()), CategoryFilter::All);
        assert_eq!(
            state.current(),
            CategoryFilter::Category("Gone".to_string())
        );
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let filter = CategoryFilter::parse("motivation");
        assert_eq!(filter.apply(&quotes()).len(), 2);
    }
}
