//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::QuestionError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by the question generator.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerateError {
    #[error("category has only {available} usable animals, need at least 4")]
    InsufficientContent { available: usize },
    #[error(transparent)]
    Question(#[from] QuestionError),
}

/// Errors emitted by `QuizSession`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,
    #[error("session already completed")]
    Completed,
    #[error("answer index {selected} is out of range")]
    InvalidAnswer { selected: usize },
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
