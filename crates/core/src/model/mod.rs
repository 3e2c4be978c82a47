mod animal;
mod category;
mod ids;
mod progress;
mod question;

pub use animal::Animal;
pub use category::{Category, CategoryError};
pub use ids::{AnimalId, CategoryId, ParseIdError};
pub use progress::{
    default_gradient, CategoryCompletion, PlayerProgress, StarRating, QUESTIONS_PER_SESSION,
    UNLOCK_CAP,
};
pub use question::{Question, QuestionError, ANSWERS_PER_QUESTION};
