use async_trait::async_trait;
use sqlx::Row;

use quiz_core::model::PlayerProgress;

use crate::repository::{
    decode_payload, encode_payload, ProgressRepository, StorageError, PROGRESS_KEY,
};

use super::SqliteRepository;

#[async_trait]
impl ProgressRepository for SqliteRepository {
    async fn load(&self) -> Result<Option<PlayerProgress>, StorageError> {
        let row = sqlx::query("SELECT payload FROM game_state WHERE key = ?1")
            .bind(PROGRESS_KEY)
            .fetch_optional(self.pool())
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let payload: String = row
            .try_get("payload")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        decode_payload(&payload).map(Some)
    }

    async fn save(&self, progress: &PlayerProgress) -> Result<(), StorageError> {
        let payload = encode_payload(progress)?;

        sqlx::query(
            r"
            INSERT INTO game_state (key, payload)
            VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET
                payload = excluded.payload
            ",
        )
        .bind(PROGRESS_KEY)
        .bind(payload)
        .execute(self.pool())
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
