#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod model;

pub use error::Error;
pub use model::{
    Animal, AnimalId, Category, CategoryCompletion, CategoryError, CategoryId, PlayerProgress,
    Question, QuestionError, StarRating, ANSWERS_PER_QUESTION, QUESTIONS_PER_SESSION, UNLOCK_CAP,
};
