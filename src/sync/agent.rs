use super::{RemoteSource, quotes_from_records};
use crate::core::data::Quote;
use crate::core::store::{Conflict, MergeReport, QuoteStore};
use crate::utils::format::plural;
use chrono::{DateTime, Utc};
use std::future::Future;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncStatus {
    Synced(MergeReport),
    Failed(String),
}

/// Result of one sync run, rendered as a transient status line
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub status: SyncStatus,
    /// Set when the merged list could not be persisted
    pub save_error: Option<String>,
    pub finished_at: DateTime<Utc>,
}

impl SyncReport {
    pub fn is_ok(&self) -> bool {
        matches!(self.status, SyncStatus::Synced(_)) && self.save_error.is_none()
    }

    pub fn conflicts(&self) -> &[Conflict] {
        match &self.status {
            SyncStatus::Synced(report) => &report.conflicts,
            SyncStatus::Failed(_) => &[],
        }
    }

    pub fn message(&self) -> String {
        let mut message = match &self.status {
            SyncStatus::Failed(reason) => format!("Sync failed: {}", reason),
            SyncStatus::Synced(report) if report.is_noop() => {
                "Quotes are up to date with the server.".to_string()
            }
            SyncStatus::Synced(report) => {
                let mut parts = Vec::new();
                if report.added > 0 {
                    parts.push(format!("{} added", plural(report.added, "quote")));
                }
                if !report.conflicts.is_empty() {
                    parts.push(format!(
                        "{} resolved (server version kept)",
                        plural(report.conflicts.len(), "conflict")
                    ));
                }
                format!("Quotes synced with server: {}.", parts.join(", "))
            }
        };

        if let Some(err) = &self.save_error {
            message.push_str(&format!(" Changes were not saved: {}", err));
        }
        message
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    Pushed(usize),
    Skipped,
    Failed(String),
}

/// Fetches the remote list and merges it into the store
pub struct SyncAgent {
    remote: Box<dyn RemoteSource>,
    default_category: String,
}

impl SyncAgent {
    pub fn new(remote: Box<dyn RemoteSource>, default_category: impl Into<String>) -> Self {
        Self {
            remote,
            default_category: default_category.into(),
        }
    }

    /// One fetch-and-merge pass. Failures become a status, never an error.
    pub async fn run_once(&self, store: &mut QuoteStore) -> SyncReport {
        let (status, save_error) = match self.remote.fetch().await {
            Ok(records) => {
                let remote = quotes_from_records(&records, &self.default_category);
                debug!(
                    records = records.len(),
                    mapped = remote.len(),
                    "fetched remote quotes"
                );

                let (report, saved) = store.merge(remote);
                for conflict in &report.conflicts {
                    info!(
                        text = %conflict.text,
                        local = %conflict.local_category,
                        remote = %conflict.remote_category,
                        "conflict resolved, server category kept"
                    );
                }
                (SyncStatus::Synced(report), saved.err().map(|e| e.to_string()))
            }
            Err(e) => {
                warn!(error = %e, "sync failed");
                (SyncStatus::Failed(e.to_string()), None)
            }
        };

        SyncReport {
            status,
            save_error,
            finished_at: Utc::now(),
        }
    }

    /// Run on a fixed interval until `shutdown` resolves; the first run is immediate.
    ///
    /// Returns how many runs completed.
    pub async fn run_periodic<S, F>(
        &self,
        store: &mut QuoteStore,
        every: Duration,
        shutdown: S,
        mut on_report: F,
    ) -> usize
    where
        S: Future<Output = ()>,
        F: FnMut(&SyncReport),
    {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        tokio::pin!(shutdown);

        let mut runs = 0;
        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    debug!(runs, "periodic sync stopped");
                    break;
                }
                _ = ticker.tick() => {
                    let report = self.run_once(store).await;
                    runs += 1;
                    on_report(&report);
                }
            }
        }
        runs
    }

    /// Best-effort, at-most-once post of `quotes`; no retry.
    ///
    /// Repeating a push can duplicate records on the remote side.
    pub async fn push(&self, quotes: &[Quote]) -> PushOutcome {
        if quotes.is_empty() {
            return PushOutcome::Skipped;
        }

        match self.remote.push(quotes).await {
            Ok(()) => PushOutcome::Pushed(quotes.len()),
            Err(e) => {
                warn!(error = %e, count = quotes.len(), "push failed, not retrying");
                PushOutcome::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore};
    use crate::sync::RemoteSource;
    use crate::utils::error::{AppError, AppResult};
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use tokio::sync::Notify;

    #[derive(Default)]
    struct FakeRemote {
        responses: Mutex<VecDeque<AppResult<Vec<Value>>>>,
        pushed: Arc<Mutex<Vec<Vec<Quote>>>>,
        fail_push: bool,
    }

    impl FakeRemote {
        fn with_responses(responses: Vec<AppResult<Vec<Value>>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl RemoteSource for FakeRemote {
        async fn fetch(&self) -> AppResult<Vec<Value>> {
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn push(&self, quotes: &[Quote]) -> AppResult<()> {
            if self.fail_push {
                return Err(AppError::Network("connection refused".to_string()));
            }
            self.pushed.lock().unwrap().push(quotes.to_vec());
            Ok(())
        }
    }

    fn quote(text: &str, category: &str) -> Quote {
        Quote::new(text, category).unwrap()
    }

    fn store_with(quotes: Vec<Quote>) -> QuoteStore {
        let mut store = QuoteStore::empty(Arc::new(MemoryStore::new()));
        store.replace(quotes).unwrap();
        store
    }

    #[tokio::test]
    async fn test_run_once_merges_with_server_winning() {
        let remote = FakeRemote::with_responses(vec![Ok(vec![
            json!({"text": "t1", "category": "B"}),
            json!({"text": "t2", "category": "C"}),
        ])]);
        let agent = SyncAgent::new(Box::new(remote), "General");
        let mut store = store_with(vec![quote("t1", "A")]);

        let report = agent.run_once(&mut store).await;

        assert!(report.is_ok());
        assert_eq!(store.get(), &[quote("t1", "B"), quote("t2", "C")]);
        assert_eq!(report.conflicts().len(), 1);
        assert_eq!(
            report.message(),
            "Quotes synced with server: 1 quote added, 1 conflict resolved (server version kept)."
        );
    }

    #[tokio::test]
    async fn test_run_once_maps_generic_records() {
        let remote = FakeRemote::with_responses(vec![Ok(vec![
            json!({"userId": 1, "id": 1, "title": "Remote title", "body": "..."}),
            json!({"id": 2}),
        ])]);
        let agent = SyncAgent::new(Box::new(remote), "General");
        let mut store = store_with(Vec::new());

        agent.run_once(&mut store).await;

        assert_eq!(store.get(), &[quote("Remote title", "General")]);
    }

    #[tokio::test]
    async fn test_run_once_failure_leaves_store_untouched() {
        let remote = FakeRemote::with_responses(vec![Err(AppError::Network(
            "dns error".to_string(),
        ))]);
        let agent = SyncAgent::new(Box::new(remote), "General");
        let mut store = store_with(vec![quote("t1", "A")]);

        let report = agent.run_once(&mut store).await;

        assert!(!report.is_ok());
        assert!(matches!(report.status, SyncStatus::Failed(_)));
        assert!(report.message().starts_with("Sync failed: Network error: dns error"));
        assert_eq!(store.get(), &[quote("t1", "A")]);
    }

    #[tokio::test]
    async fn test_run_once_reports_save_failure() {
        let remote = FakeRemote::with_responses(vec![Ok(vec![json!({
            "text": "A long remote quote that will not fit",
            "category": "General"
        })])]);
        let agent = SyncAgent::new(Box::new(remote), "General");
        let medium: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::with_quota(10));
        let mut store = QuoteStore::empty(medium);

        let report = agent.run_once(&mut store).await;

        assert!(matches!(report.status, SyncStatus::Synced(_)));
        assert!(report.save_error.is_some());
        assert!(!report.is_ok());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_repeated_runs_are_stable() {
        let payload = vec![json!({"text": "t1", "category": "B"})];
        let remote = FakeRemote::with_responses(vec![Ok(payload.clone()), Ok(payload)]);
        let agent = SyncAgent::new(Box::new(remote), "General");
        let mut store = store_with(Vec::new());

        agent.run_once(&mut store).await;
        let second = agent.run_once(&mut store).await;

        assert_eq!(store.len(), 1);
        assert_eq!(second.message(), "Quotes are up to date with the server.");
    }

    #[tokio::test]
    async fn test_run_periodic_until_shutdown() {
        let remote = FakeRemote::with_responses(vec![
            Ok(vec![json!({"text": "first", "category": "A"})]),
            Err(AppError::Network("timeout".to_string())),
            Ok(vec![json!({"text": "third", "category": "C"})]),
        ]);
        let agent = SyncAgent::new(Box::new(remote), "General");
        let mut store = store_with(Vec::new());

        let stop = Arc::new(Notify::new());
        let waiter = stop.clone();
        let mut statuses = Vec::new();

        let runs = agent
            .run_periodic(
                &mut store,
                Duration::from_millis(5),
                async move { waiter.notified().await },
                |report| {
                    statuses.push(report.is_ok());
                    if statuses.len() == 3 {
                        stop.notify_one();
                    }
                },
            )
            .await;

        assert_eq!(runs, 3);
        assert_eq!(statuses, vec![true, false, true]);
        assert_eq!(store.get(), &[quote("first", "A"), quote("third", "C")]);
    }

    #[tokio::test]
    async fn test_push_is_best_effort() {
        let remote = FakeRemote::default();
        let pushed = remote.pushed.clone();
        let agent = SyncAgent::new(Box::new(remote), "General");

        assert_eq!(agent.push(&[]).await, PushOutcome::Skipped);
        assert_eq!(agent.push(&[quote("t1", "A")]).await, PushOutcome::Pushed(1));
        // a second push of the same quote is sent again
        assert_eq!(agent.push(&[quote("t1", "A")]).await, PushOutcome::Pushed(1));
        assert_eq!(pushed.lock().unwrap().len(), 2);

        let failing = FakeRemote {
            fail_push: true,
            ..FakeRemote::default()
        };
        let agent = SyncAgent::new(Box::new(failing), "General");
        assert!(matches!(
            agent.push(&[quote("t1", "A")]).await,
            PushOutcome::Failed(_)
        ));
    }
}
