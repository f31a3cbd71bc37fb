//! quotegen - a random quote generator with category filters and remote sync
//!
//! The library owns the quote list, persists it through a key-value medium,
//! and merges it with a remote collection. The `quotegen` binary is a thin
//! CLI over [`QuoteGen`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod logging;
pub mod storage;
pub mod sync;
pub mod utils;

pub use crate::core::{
    data::Quote,
    filter::CategoryFilter,
    store::{Conflict, MergeReport, QuoteStore},
    transfer::ImportMode,
    view::{Shown, Viewer, pick_random},
};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use sync::{PushOutcome, RemoteSource, SyncAgent, SyncReport};

use crate::core::filter::FilterState;
use crate::utils::error::{AppError, AppResult};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Result of adding a quote
#[derive(Debug)]
pub struct AddOutcome {
    pub quote: Quote,
    /// The quote is in memory but could not be persisted
    pub save_error: Option<AppError>,
    /// Present when the quote was posted to the remote
    pub push: Option<PushOutcome>,
}

/// Result of importing a file
#[derive(Debug)]
pub struct ImportOutcome {
    pub added: usize,
    /// Present when the import triggered a sync run
    pub sync: Option<SyncReport>,
}

/// Main library interface: the store plus the components that use it
pub struct QuoteGen {
    store: QuoteStore,
    viewer: Viewer,
    filter: FilterState,
    agent: Option<SyncAgent>,
    config: config::Config,
}

impl QuoteGen {
    /// Open file-backed storage and the HTTP remote described by `config`
    pub fn open(config: config::Config) -> AppResult<Self> {
        let durable: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&config.general.data_dir));
        let session: Arc<dyn KeyValueStore> =
            Arc::new(FileStore::new(&config.general.session_dir));

        let remote: Option<Box<dyn RemoteSource>> = match &config.remote {
            Some(remote) => Some(Box::new(sync::HttpRemote::new(remote)?)),
            None => None,
        };

        Ok(Self::with_parts(config, durable, session, remote))
    }

    /// Assemble from explicit media and remote
    pub fn with_parts(
        config: config::Config,
        durable: Arc<dyn KeyValueStore>,
        session: Arc<dyn KeyValueStore>,
        remote: Option<Box<dyn RemoteSource>>,
    ) -> Self {
        let default_category = config
            .remote
            .as_ref()
            .map(|r| r.default_category.clone())
            .unwrap_or_else(|| config::RemoteConfig::default().default_category);

        Self {
            store: QuoteStore::load(durable.clone()),
            viewer: Viewer::new(session),
            filter: FilterState::new(durable),
            agent: remote.map(|remote| SyncAgent::new(remote, default_category)),
            config,
        }
    }

    pub fn config(&self) -> &config::Config {
        &self.config
    }

    pub fn store(&self) -> &QuoteStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut QuoteStore {
        &mut self.store
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    pub fn has_remote(&self) -> bool {
        self.agent.is_some()
    }

    /// The persisted filter, reset to "all" if its category is gone
    pub fn active_filter(&self) -> CategoryFilter {
        self.filter.effective(self.store.get())
    }

    pub fn category_options(&self) -> Vec<String> {
        crate::core::filter::options(self.store.get())
    }

    /// Quotes visible under the active filter
    pub fn visible(&self) -> Vec<Quote> {
        self.active_filter()
            .apply(self.store.get())
            .into_iter()
            .cloned()
            .collect()
    }

    /// Pick a new random quote among the visible ones
    pub fn next_quote(&self) -> Shown {
        self.viewer.show_random(&self.visible())
    }

    /// Show the session's last quote, else a random visible one
    pub fn restore(&self) -> Shown {
        self.viewer.restore_last(&self.visible())
    }

    /// Persist a new filter and show a random quote under it
    pub fn select_category(&self, filter: &CategoryFilter) -> AppResult<Shown> {
        self.filter.select(filter)?;
        Ok(self.next_quote())
    }

    /// Validate and add a quote; push it when the remote asks for it.
    ///
    /// Only validation fails the call; storage and push problems are reported
    /// in the outcome.
    pub async fn add_quote(&mut self, text: &str, category: &str) -> AppResult<AddOutcome> {
        let quote = Quote::new(text, category)?;

        let save_error = match self.store.add(quote.clone()) {
            Ok(_) => None,
            Err(e @ AppError::Storage(_)) => Some(e),
            Err(e) => return Err(e),
        };

        let push = match (&self.agent, &self.config.remote) {
            (Some(agent), Some(remote)) if remote.push_on_add => {
                Some(agent.push(std::slice::from_ref(&quote)).await)
            }
            _ => None,
        };

        Ok(AddOutcome {
            quote,
            save_error,
            push,
        })
    }

    /// Import a file, then sync if the remote asks for it
    pub async fn import(&mut self, path: &Path, mode: ImportMode) -> AppResult<ImportOutcome> {
        let added = crate::core::transfer::import_file(&mut self.store, path, mode)?;

        let sync_after = self
            .config
            .remote
            .as_ref()
            .is_some_and(|remote| remote.sync_on_import);
        let sync = if sync_after { self.sync_now().await } else { None };

        Ok(ImportOutcome { added, sync })
    }

    /// One on-demand sync run; `None` without a remote
    pub async fn sync_now(&mut self) -> Option<SyncReport> {
        let agent = self.agent.as_ref()?;
        Some(agent.run_once(&mut self.store).await)
    }

    /// Post every local quote in one batch; `None` without a remote
    pub async fn push_all(&self) -> Option<PushOutcome> {
        let agent = self.agent.as_ref()?;
        Some(agent.push(self.store.get()).await)
    }

    /// Sync on the configured interval until `shutdown` resolves
    pub async fn watch<S, F>(&mut self, every: std::time::Duration, shutdown: S, on_report: F) -> AppResult<usize>
    where
        S: std::future::Future<Output = ()>,
        F: FnMut(&SyncReport),
    {
        let agent = self
            .agent
            .as_ref()
            .ok_or_else(|| AppError::Sync("No remote configured".to_string()))?;
        debug!(every_secs = every.as_secs(), "starting periodic sync");
        Ok(agent.run_periodic(&mut self.store, every, shutdown, on_report).await)
    }
}
