//! Random quote selection and the session-scoped "last shown" memory

use crate::core::data::Quote;
use crate::storage::{KeyValueStore, LAST_VIEWED_KEY};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::sync::Arc;
use tracing::{debug, warn};

/// Uniformly pick one quote, `None` for an empty slice
pub fn pick_random<'a, R: Rng + ?Sized>(items: &'a [Quote], rng: &mut R) -> Option<&'a Quote> {
    items.choose(rng)
}

/// What the display area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Quote(Quote),
    Empty,
}

impl Shown {
    pub const PLACEHOLDER: &'static str = "No quotes available. Add one with `quotegen add`!";

    pub fn quote(&self) -> Option<&Quote> {
        match self {
            Shown::Quote(quote) => Some(quote),
            Shown::Empty => None,
        }
    }
}

pub struct Viewer {
    session: Arc<dyn KeyValueStore>,
}

impl Viewer {
    pub fn new(session: Arc<dyn KeyValueStore>) -> Self {
        Self { session }
    }

    /// Pick a random quote and remember it for this session
    pub fn show_random(&self, quotes: &[Quote]) -> Shown {
        self.show_random_with(quotes, &mut rand::rng())
    }

    pub fn show_random_with<R: Rng + ?Sized>(&self, quotes: &[Quote], rng: &mut R) -> Shown {
        let Some(quote) = pick_random(quotes, rng) else {
            return Shown::Empty;
        };

        self.remember(quote);
        Shown::Quote(quote.clone())
    }

    /// Show the quote remembered for this session, or pick a new one
    pub fn restore_last(&self, quotes: &[Quote]) -> Shown {
        match self.last() {
            Some(quote) => Shown::Quote(quote),
            None => self.show_random(quotes),
        }
    }

    /// The remembered quote, if one is stored and readable
    pub fn last(&self) -> Option<Quote> {
        let raw = match self.session.get(LAST_VIEWED_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(error = %e, "could not read session storage");
                return None;
            }
        };

        match serde_json::from_str::<Quote>(&raw).map(Quote::validated) {
            Ok(Ok(quote)) => Some(quote),
            _ => {
                debug!("ignoring unreadable last viewed quote");
                None
            }
        }
    }

    /// Forget the remembered quote, starting a fresh session
    pub fn forget(&self) {
        if let Err(e) = self.session.remove(LAST_VIEWED_KEY) {
            warn!(error = %e, "could not clear session storage");
        }
    }

    fn remember(&self, quote: &Quote) {
        let stored = serde_json::to_string(quote)
            .map_err(|e| e.to_string())
            .and_then(|raw| {
                self.session
                    .set(LAST_VIEWED_KEY, &raw)
                    .map_err(|e| e.to_string())
            });
        if let Err(e) = stored {
            warn!(error = %e, "could not remember last viewed quote");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn quotes() -> Vec<Quote> {
        vec![
            Quote::new("one", "A").unwrap(),
            Quote::new("two", "B").unwrap(),
            Quote::new("three", "C").unwrap(),
        ]
    }

    #[test]
    fn test_pick_random_empty_is_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(pick_random(&[], &mut rng).is_none());
    }

    #[test]
    fn test_pick_random_reaches_every_item() {
        let items = quotes();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.insert(pick_random(&items, &mut rng).unwrap().text.clone());
        }
        assert_eq!(seen.len(), items.len());
    }

    #[test]
    fn test_show_random_on_empty_renders_placeholder() {
        let session = Arc::new(MemoryStore::new());
        let viewer = Viewer::new(session.clone());

        assert_eq!(viewer.show_random(&[]), Shown::Empty);
        assert_eq!(session.get(LAST_VIEWED_KEY).unwrap(), None);
    }

    #[test]
    fn test_show_random_remembers_quote() {
        let viewer = Viewer::new(Arc::new(MemoryStore::new()));
        let mut rng = StdRng::seed_from_u64(1);

        let shown = viewer.show_random_with(&quotes(), &mut rng);

        assert_eq!(viewer.last().as_ref(), shown.quote());
    }

    #[test]
    fn test_restore_last_prefers_remembered_quote() {
        let viewer = Viewer::new(Arc::new(MemoryStore::new()));
        let first = viewer.show_random(&quotes());

        for _ in 0..10 {
            assert_eq!(viewer.restore_last(&quotes()), first);
        }
    }

    #[test]
    fn test_restore_last_falls_back_to_random() {
        let session = Arc::new(MemoryStore::new());
        session.set(LAST_VIEWED_KEY, "garbage").unwrap();
        let viewer = Viewer::new(session);

        let shown = viewer.restore_last(&quotes());
        assert!(quotes().contains(shown.quote().unwrap()));

        viewer.forget();
        assert_eq!(viewer.restore_last(&[]), Shown::Empty);
    }
}
