mod progress;
mod session;

pub use progress::SessionProgress;
pub use session::{AnswerFeedback, QuizSession};
