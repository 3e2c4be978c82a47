use std::sync::Arc;

use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::prefetch::ImagePrefetcher;
use crate::progress_service::ProgressService;

/// Assembles app-facing services over a storage backend.
#[derive(Clone)]
pub struct AppServices {
    progress: Arc<ProgressService>,
    prefetcher: Arc<ImagePrefetcher>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and hydrate progress.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails. A failed
    /// or empty progress *read* is not an error; it hydrates to defaults.
    pub async fn new_sqlite(db_url: &str) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage).await)
    }

    /// In-memory backend for tests and demos.
    pub async fn in_memory() -> Self {
        Self::from_storage(&Storage::in_memory()).await
    }

    async fn from_storage(storage: &Storage) -> Self {
        let progress = Arc::new(ProgressService::new(Arc::clone(&storage.progress)));
        progress.load().await;

        Self {
            progress,
            prefetcher: Arc::new(ImagePrefetcher::new()),
        }
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn prefetcher(&self) -> Arc<ImagePrefetcher> {
        Arc::clone(&self.prefetcher)
    }
}
