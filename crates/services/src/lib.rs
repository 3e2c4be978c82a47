#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod generator;
pub mod prefetch;
pub mod progress_service;
pub mod sessions;
pub mod timeout;

pub use app_services::AppServices;
pub use error::{AppServicesError, GenerateError, SessionError};
pub use generator::generate_questions;
pub use prefetch::ImagePrefetcher;
pub use progress_service::ProgressService;
pub use sessions::{AnswerFeedback, QuizSession, SessionProgress};
pub use timeout::with_timeout;
