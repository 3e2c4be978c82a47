use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use quiz_core::model::{default_gradient, CategoryId, PlayerProgress, StarRating};

/// Storage key the progress record lives under. Fixed so existing records
/// keep loading across releases.
pub const PROGRESS_KEY: &str = "gameState";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

//
// ─── PERSISTED RECORD ──────────────────────────────────────────────────────────
//

/// Validation failures when decoding a persisted record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressRecordError {
    #[error("unlockedCategories must be at least 1")]
    UnlockedBelowOne,

    #[error("star rating {value} for category {category_id} is out of range")]
    InvalidStarRating { category_id: u32, value: u8 },

    #[error("background gradient needs at least 2 colors, got {got}")]
    InvalidGradient { got: usize },
}

/// Persisted shape for player progress: one JSON record under one key,
/// camelCase field names, no version field.
///
/// This mirrors the domain `PlayerProgress` so repositories can
/// serialize/deserialize without leaking storage concerns into the domain
/// layer. Compatibility is ad hoc: missing fields merge over defaults via
/// serde, structurally invalid records are rejected on decode and the
/// service layer falls back to a default state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    #[serde(default = "default_unlocked")]
    pub unlocked_categories: u32,
    #[serde(default)]
    pub category_stars: BTreeMap<u32, u8>,
    #[serde(default)]
    pub total_attempts: u64,
    #[serde(default)]
    pub correct_answers: u64,
    #[serde(default = "default_gradient")]
    pub background_gradient: Vec<String>,
}

fn default_unlocked() -> u32 {
    1
}

impl ProgressRecord {
    #[must_use]
    pub fn from_progress(progress: &PlayerProgress) -> Self {
        Self {
            unlocked_categories: progress.unlocked_categories(),
            category_stars: progress
                .category_stars()
                .iter()
                .map(|(id, stars)| (id.value(), stars.value()))
                .collect(),
            total_attempts: progress.total_attempts(),
            correct_answers: progress.correct_answers(),
            background_gradient: progress.background_gradient().to_vec(),
        }
    }

    /// Convert the record back into domain `PlayerProgress`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressRecordError` if the record violates the structural
    /// invariants (unlock count below 1, star values outside 0..=3, fewer
    /// than two gradient colors).
    pub fn into_progress(self) -> Result<PlayerProgress, ProgressRecordError> {
        if self.unlocked_categories < 1 {
            return Err(ProgressRecordError::UnlockedBelowOne);
        }
        if self.background_gradient.len() < 2 {
            return Err(ProgressRecordError::InvalidGradient {
                got: self.background_gradient.len(),
            });
        }

        let mut category_stars = BTreeMap::new();
        for (category_id, value) in self.category_stars {
            let stars = StarRating::from_value(value).ok_or(
                ProgressRecordError::InvalidStarRating { category_id, value },
            )?;
            category_stars.insert(CategoryId::new(category_id), stars);
        }

        Ok(PlayerProgress::from_persisted(
            self.unlocked_categories,
            category_stars,
            self.total_attempts,
            self.correct_answers,
            self.background_gradient,
        ))
    }
}

pub(crate) fn decode_payload(payload: &str) -> Result<PlayerProgress, StorageError> {
    let record: ProgressRecord = serde_json::from_str(payload)
        .map_err(|err| StorageError::Serialization(err.to_string()))?;
    record
        .into_progress()
        .map_err(|err| StorageError::Serialization(err.to_string()))
}

pub(crate) fn encode_payload(progress: &PlayerProgress) -> Result<String, StorageError> {
    serde_json::to_string(&ProgressRecord::from_progress(progress))
        .map_err(|err| StorageError::Serialization(err.to_string()))
}

//
// ─── REPOSITORY CONTRACT ───────────────────────────────────────────────────────
//

/// Repository contract for the single persistent progress record.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Fetch the persisted progress, if any.
    ///
    /// # Errors
    ///
    /// Returns `Ok(None)` when nothing has been stored yet and
    /// `StorageError::Serialization` when the stored payload is corrupt or
    /// structurally invalid.
    async fn load(&self) -> Result<Option<PlayerProgress>, StorageError>;

    /// Persist the progress, replacing any previous record (last write wins).
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn save(&self, progress: &PlayerProgress) -> Result<(), StorageError>;
}

/// In-memory repository keeping the serialized payload, so tests exercise
/// the same codec as the durable adapters.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    payload: Arc<Mutex<Option<String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the repository with an arbitrary payload, valid or not.
    #[must_use]
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Arc::new(Mutex::new(Some(payload.into()))),
        }
    }

    /// Raw stored payload, for assertions.
    #[must_use]
    pub fn payload(&self) -> Option<String> {
        self.payload
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn load(&self) -> Result<Option<PlayerProgress>, StorageError> {
        let guard = self
            .payload
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        match guard.as_deref() {
            Some(payload) => decode_payload(payload).map(Some),
            None => Ok(None),
        }
    }

    async fn save(&self, progress: &PlayerProgress) -> Result<(), StorageError> {
        let payload = encode_payload(progress)?;
        let mut guard = self
            .payload
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(payload);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            progress: Arc::new(InMemoryRepository::new()),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn progress_after_two_sessions() -> PlayerProgress {
        let mut progress = PlayerProgress::default();
        progress.record_completion(CategoryId::new(1), 10);
        progress.record_completion(CategoryId::new(2), 4);
        progress
    }

    #[test]
    fn record_uses_camel_case_keys_and_string_map_keys() {
        let json = serde_json::to_string(&ProgressRecord::from_progress(
            &progress_after_two_sessions(),
        ))
        .unwrap();

        assert!(json.contains("\"unlockedCategories\":2"));
        assert!(json.contains("\"categoryStars\":{\"1\":3,\"2\":2}"));
        assert!(json.contains("\"totalAttempts\":20"));
        assert!(json.contains("\"correctAnswers\":14"));
        assert!(json.contains("\"backgroundGradient\""));
    }

    #[test]
    fn missing_fields_merge_over_defaults() {
        let record: ProgressRecord = serde_json::from_str("{}").unwrap();
        let progress = record.into_progress().unwrap();
        assert_eq!(progress, PlayerProgress::default());
    }

    #[test]
    fn partial_record_keeps_known_fields() {
        let record: ProgressRecord =
            serde_json::from_str(r#"{"unlockedCategories":3,"categoryStars":{"2":1}}"#).unwrap();
        let progress = record.into_progress().unwrap();

        assert_eq!(progress.unlocked_categories(), 3);
        assert_eq!(progress.stars_for(CategoryId::new(2)), StarRating::One);
        assert_eq!(progress.total_attempts(), 0);
        assert_eq!(progress.background_gradient(), default_gradient());
    }

    #[test]
    fn rejects_unlock_count_below_one() {
        let record: ProgressRecord =
            serde_json::from_str(r#"{"unlockedCategories":0}"#).unwrap();
        assert_eq!(
            record.into_progress().unwrap_err(),
            ProgressRecordError::UnlockedBelowOne
        );
    }

    #[test]
    fn rejects_out_of_range_star_values() {
        let record: ProgressRecord =
            serde_json::from_str(r#"{"categoryStars":{"1":4}}"#).unwrap();
        assert!(matches!(
            record.into_progress().unwrap_err(),
            ProgressRecordError::InvalidStarRating {
                category_id: 1,
                value: 4
            }
        ));
    }

    #[test]
    fn rejects_short_gradient() {
        let record: ProgressRecord =
            serde_json::from_str(r##"{"backgroundGradient":["#FFFFFF"]}"##).unwrap();
        assert!(matches!(
            record.into_progress().unwrap_err(),
            ProgressRecordError::InvalidGradient { got: 1 }
        ));
    }

    #[tokio::test]
    async fn in_memory_round_trips_all_fields() {
        let repo = InMemoryRepository::new();
        let progress = progress_after_two_sessions();

        repo.save(&progress).await.unwrap();
        let loaded = repo.load().await.unwrap().unwrap();
        assert_eq!(loaded, progress);
    }

    #[tokio::test]
    async fn in_memory_empty_store_loads_none() {
        let repo = InMemoryRepository::new();
        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupt_payload_surfaces_serialization_error() {
        let repo = InMemoryRepository::with_payload("not json at all");
        let err = repo.load().await.unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[tokio::test]
    async fn wrong_types_surface_serialization_error() {
        let repo = InMemoryRepository::with_payload(r#"{"unlockedCategories":"three"}"#);
        let err = repo.load().await.unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }
}
