//! Refresh scheduling
//!
//! Refresh requests may arrive in bursts (one per saved file). They are
//! debounced, a new request aborts a pending or running one, and results are
//! applied to the [`ChangeModel`] by request recency: a refresh that finishes
//! after a newer one was requested is discarded.

use crate::areas::repository::Repository;
use crate::artifacts::changes::collector::RefreshFailure;
use crate::artifacts::core::debounce::Debouncer;
use crate::artifacts::model::ChangeModel;
use crate::artifacts::model::signal::Signal;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug)]
pub enum RefreshOutcome {
    /// The change set was replaced; failed diff sides are listed
    Applied {
        generation: u64,
        failures: Vec<RefreshFailure>,
    },
    /// A newer refresh was requested before this one finished
    Superseded { generation: u64 },
}

impl RefreshOutcome {
    pub fn generation(&self) -> u64 {
        match self {
            RefreshOutcome::Applied { generation, .. }
            | RefreshOutcome::Superseded { generation } => *generation,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, RefreshOutcome::Applied { .. })
    }
}

pub struct Refresher {
    repository: Arc<Repository>,
    model: Arc<ChangeModel>,
    generation: AtomicU64,
    // serializes the generation check with the model write
    apply: Mutex<()>,
    debouncer: Debouncer,
    completed: Signal<RefreshOutcome>,
}

impl Refresher {
    pub fn new(repository: Arc<Repository>, model: Arc<ChangeModel>) -> Arc<Self> {
        let debouncer = Debouncer::new(repository.settings().debounce());

        Arc::new(Refresher {
            repository,
            model,
            generation: AtomicU64::new(0),
            apply: Mutex::new(()),
            debouncer,
            completed: Signal::new(),
        })
    }

    pub fn model(&self) -> &Arc<ChangeModel> {
        &self.model
    }

    /// Fired after every refresh, applied or superseded
    pub fn on_complete(&self) -> &Signal<RefreshOutcome> {
        &self.completed
    }

    /// Recompute the change set now and apply it unless a newer request came in
    pub async fn refresh(&self) -> RefreshOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let report = self.repository.changes().collect().await;
        let (change_set, failures) = report.into_parts();

        let outcome = {
            let _apply = self.apply.lock().unwrap_or_else(PoisonError::into_inner);
            if self.generation.load(Ordering::SeqCst) == generation {
                tracing::info!(generation, records = change_set.len(), "applying refresh");
                self.model.replace(change_set);
                RefreshOutcome::Applied {
                    generation,
                    failures,
                }
            } else {
                tracing::debug!(generation, "discarding superseded refresh");
                RefreshOutcome::Superseded { generation }
            }
        };

        self.completed.fire(&outcome);
        outcome
    }

    /// Schedule a debounced refresh, superseding any pending or running one
    pub fn trigger(self: &Arc<Self>) {
        let refresher = Arc::clone(self);
        self.debouncer.trigger(async move {
            refresher.refresh().await;
        });
    }

    /// Run a still-pending debounced refresh immediately
    pub async fn flush(&self) -> Option<RefreshOutcome> {
        if self.debouncer.cancel() {
            Some(self.refresh().await)
        } else {
            None
        }
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::core::settings::Settings;
    use std::time::Duration;

    fn refresher_outside_repository(dir: &assert_fs::TempDir) -> Arc<Refresher> {
        // a missing git binary makes every refresh fail fast and deterministically
        let settings = Settings::for_root(dir.path())
            .unwrap()
            .with_git_program("definitely-not-an-installed-git")
            .with_debounce(Duration::from_millis(200));
        let repository = Arc::new(Repository::new(settings, Box::new(std::io::sink())));

        Refresher::new(repository, Arc::new(ChangeModel::new()))
    }

    #[tokio::test]
    async fn failed_sides_are_reported_with_an_empty_change_set() {
        let dir = assert_fs::TempDir::new().unwrap();
        let refresher = refresher_outside_repository(&dir);

        let outcome = refresher.refresh().await;

        match outcome {
            RefreshOutcome::Applied {
                generation,
                failures,
            } => {
                assert_eq!(generation, 1);
                assert_eq!(failures.len(), 2);
            }
            RefreshOutcome::Superseded { .. } => panic!("single refresh cannot be superseded"),
        }
        assert!(refresher.model().list_files().is_empty());
    }

    #[tokio::test]
    async fn older_of_two_concurrent_refreshes_is_discarded() {
        let dir = assert_fs::TempDir::new().unwrap();
        // a real git process has to be awaited, so both requests are
        // registered before either finishes collecting
        let settings = Settings::for_root(dir.path()).unwrap();
        let repository = Arc::new(Repository::new(settings, Box::new(std::io::sink())));
        let refresher = Refresher::new(repository, Arc::new(ChangeModel::new()));

        let (first, second) = futures::future::join(refresher.refresh(), refresher.refresh()).await;

        assert!(!first.is_applied());
        assert!(second.is_applied());
        assert_eq!(second.generation(), 2);
    }

    #[tokio::test]
    async fn completion_signal_fires_for_every_refresh() {
        let dir = assert_fs::TempDir::new().unwrap();
        let refresher = refresher_outside_repository(&dir);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        refresher.on_complete().subscribe(move |outcome: &RefreshOutcome| {
            sink.lock().unwrap().push(outcome.generation());
        });

        refresher.refresh().await;
        refresher.refresh().await;

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test]
    async fn burst_of_triggers_refreshes_once() {
        let dir = assert_fs::TempDir::new().unwrap();
        let refresher = refresher_outside_repository(&dir);
        let count = Arc::new(Mutex::new(0));
        let counter = count.clone();
        refresher.on_complete().subscribe(move |_: &RefreshOutcome| {
            *counter.lock().unwrap() += 1;
        });

        for _ in 0..4 {
            refresher.trigger();
        }
        assert!(refresher.is_pending());
        tokio::time::sleep(Duration::from_millis(600)).await;

        assert_eq!(*count.lock().unwrap(), 1);
        assert!(!refresher.is_pending());
    }

    #[tokio::test]
    async fn flush_runs_pending_refresh_immediately() {
        let dir = assert_fs::TempDir::new().unwrap();
        let refresher = refresher_outside_repository(&dir);

        assert!(refresher.flush().await.is_none());

        refresher.trigger();
        let outcome = refresher.flush().await;

        assert!(outcome.is_some_and(|outcome| outcome.is_applied()));
        assert!(!refresher.is_pending());
    }
}
