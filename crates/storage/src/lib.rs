#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{
    InMemoryRepository, ProgressRecord, ProgressRecordError, ProgressRepository, Storage,
    StorageError, PROGRESS_KEY,
};
pub use sqlite::{SqliteInitError, SqliteRepository};
