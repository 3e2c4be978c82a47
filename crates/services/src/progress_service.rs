use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::warn;

use quiz_core::model::{CategoryCompletion, CategoryId, PlayerProgress};
use storage::repository::ProgressRepository;

use crate::timeout::with_timeout;

/// Default bound on storage waits. Purely defensive: platform storage can
/// stall, and the UI must never hang on it.
const DEFAULT_IO_TIMEOUT: Duration = Duration::from_secs(5);

/// Single source of truth for player progress.
///
/// Owned by the application root and injected into consumers. The in-memory
/// state is authoritative for the lifetime of the process: every mutation
/// applies to memory first and persists best effort afterwards, so perceived
/// state changes never wait on (or fail with) storage I/O. None of the
/// operations return errors; read failures fall back to defaults, write
/// failures are logged and swallowed.
///
/// Mutations are expected to come from a single active screen at a time;
/// the internal mutex keeps snapshots consistent but there is no
/// multi-writer or cross-process discipline.
pub struct ProgressService {
    repo: Arc<dyn ProgressRepository>,
    state: Mutex<PlayerProgress>,
    io_timeout: Duration,
}

impl ProgressService {
    #[must_use]
    pub fn new(repo: Arc<dyn ProgressRepository>) -> Self {
        Self::with_io_timeout(repo, DEFAULT_IO_TIMEOUT)
    }

    #[must_use]
    pub fn with_io_timeout(repo: Arc<dyn ProgressRepository>, io_timeout: Duration) -> Self {
        Self {
            repo,
            state: Mutex::new(PlayerProgress::default()),
            io_timeout,
        }
    }

    fn lock(&self) -> MutexGuard<'_, PlayerProgress> {
        // A poisoned lock only means a panicking reader; the state itself
        // stays valid, so recover it rather than propagate.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current in-memory progress.
    #[must_use]
    pub fn snapshot(&self) -> PlayerProgress {
        self.lock().clone()
    }

    /// Hydrates progress from storage at startup.
    ///
    /// Never fails: a missing record, corrupt payload, storage error, or
    /// timeout all fall back to the default state.
    pub async fn load(&self) -> PlayerProgress {
        let progress = match with_timeout(self.io_timeout, self.repo.load()).await {
            Some(Ok(Some(progress))) => progress,
            Some(Ok(None)) => PlayerProgress::default(),
            Some(Err(err)) => {
                warn!(error = %err, "failed to load progress, using defaults");
                PlayerProgress::default()
            }
            None => {
                warn!("progress load timed out, using defaults");
                PlayerProgress::default()
            }
        };

        *self.lock() = progress.clone();
        progress
    }

    /// Records a finished session and persists the new state.
    pub async fn complete_category(
        &self,
        category_id: CategoryId,
        correct_count: u32,
    ) -> CategoryCompletion {
        let (completion, snapshot) = {
            let mut state = self.lock();
            let completion = state.record_completion(category_id, correct_count);
            (completion, state.clone())
        };

        self.persist(&snapshot).await;
        completion
    }

    /// Replaces the cosmetic background preference and persists. Gradients
    /// with fewer than two colors are ignored, keeping the stored record
    /// decodable.
    pub async fn set_background_gradient(&self, colors: Vec<String>) -> PlayerProgress {
        let snapshot = {
            let mut state = self.lock();
            state.set_background_gradient(colors);
            state.clone()
        };

        self.persist(&snapshot).await;
        snapshot
    }

    /// Wipes all progress back to the default state and persists.
    pub async fn reset_progress(&self) -> PlayerProgress {
        let snapshot = {
            let mut state = self.lock();
            *state = PlayerProgress::default();
            state.clone()
        };

        self.persist(&snapshot).await;
        snapshot
    }

    async fn persist(&self, snapshot: &PlayerProgress) {
        match with_timeout(self.io_timeout, self.repo.save(snapshot)).await {
            Some(Ok(())) => {}
            Some(Err(err)) => {
                warn!(error = %err, "failed to persist progress, keeping in-memory state");
            }
            None => warn!("progress write timed out, keeping in-memory state"),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use quiz_core::model::{default_gradient, StarRating};
    use storage::repository::{InMemoryRepository, StorageError};

    struct FailingRepository;

    #[async_trait]
    impl ProgressRepository for FailingRepository {
        async fn load(&self) -> Result<Option<PlayerProgress>, StorageError> {
            Err(StorageError::Connection("unavailable".into()))
        }

        async fn save(&self, _progress: &PlayerProgress) -> Result<(), StorageError> {
            Err(StorageError::Connection("unavailable".into()))
        }
    }

    fn service_over(repo: InMemoryRepository) -> ProgressService {
        ProgressService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn load_defaults_when_nothing_is_stored() {
        let service = service_over(InMemoryRepository::new());
        let progress = service.load().await;
        assert_eq!(progress, PlayerProgress::default());
    }

    #[tokio::test]
    async fn load_falls_back_on_corrupt_payload() {
        let service = service_over(InMemoryRepository::with_payload("{broken"));
        let progress = service.load().await;
        assert_eq!(progress, PlayerProgress::default());
    }

    #[tokio::test]
    async fn load_falls_back_on_storage_error() {
        let service = ProgressService::new(Arc::new(FailingRepository));
        let progress = service.load().await;
        assert_eq!(progress, PlayerProgress::default());
    }

    #[tokio::test]
    async fn completion_updates_memory_and_storage() {
        let repo = InMemoryRepository::new();
        let service = service_over(repo.clone());
        service.load().await;

        let completion = service
            .complete_category(CategoryId::new(1), 10)
            .await;
        assert_eq!(completion.stars, StarRating::Three);
        assert_eq!(completion.newly_unlocked, Some(2));

        // The persisted record matches the in-memory snapshot.
        let persisted = repo.load().await.unwrap().unwrap();
        assert_eq!(persisted, service.snapshot());
        assert_eq!(persisted.unlocked_categories(), 2);
    }

    #[tokio::test]
    async fn write_failure_keeps_in_memory_state() {
        let service = ProgressService::new(Arc::new(FailingRepository));
        service.load().await;

        let completion = service
            .complete_category(CategoryId::new(1), 10)
            .await;
        assert_eq!(completion.stars, StarRating::Three);

        let snapshot = service.snapshot();
        assert_eq!(snapshot.unlocked_categories(), 2);
        assert_eq!(snapshot.total_attempts(), 10);
    }

    #[tokio::test]
    async fn reset_then_load_yields_defaults() {
        let repo = InMemoryRepository::new();
        let service = service_over(repo.clone());
        service.load().await;
        service.complete_category(CategoryId::new(1), 10).await;

        service.reset_progress().await;
        let reloaded = service.load().await;
        assert_eq!(reloaded, PlayerProgress::default());
    }

    #[tokio::test]
    async fn short_gradient_write_survives_a_reload() {
        let repo = InMemoryRepository::new();
        let service = service_over(repo.clone());
        service.load().await;
        service.complete_category(CategoryId::new(1), 10).await;

        let snapshot = service
            .set_background_gradient(vec!["#FFFFFF".into()])
            .await;
        assert_eq!(snapshot.background_gradient(), default_gradient());

        // A fresh service over the same repository still decodes the record.
        let reloaded = service_over(repo).load().await;
        assert_eq!(reloaded.stars_for(CategoryId::new(1)), StarRating::Three);
        assert_eq!(reloaded.unlocked_categories(), 2);
        assert_eq!(reloaded.total_attempts(), 10);
    }

    #[tokio::test]
    async fn gradient_change_only_touches_the_cosmetic_field() {
        let repo = InMemoryRepository::new();
        let service = service_over(repo.clone());
        service.load().await;
        service.complete_category(CategoryId::new(1), 10).await;

        let snapshot = service
            .set_background_gradient(vec!["#B71C1C".into(), "#FFC107".into()])
            .await;
        assert_eq!(snapshot.background_gradient()[0], "#B71C1C");
        assert_eq!(snapshot.unlocked_categories(), 2);

        let persisted = repo.load().await.unwrap().unwrap();
        assert_eq!(persisted.background_gradient()[0], "#B71C1C");
    }
}
