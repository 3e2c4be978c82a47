use std::fmt;

use quiz_core::model::{CategoryId, Question, ANSWERS_PER_QUESTION};

use crate::error::SessionError;
use super::progress::SessionProgress;

//
// ─── ANSWER FEEDBACK ───────────────────────────────────────────────────────────
//

/// Captures the outcome of answering one question within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub question_index: usize,
    pub selected: usize,
    pub correct_index: usize,
    pub is_correct: bool,
    pub session_complete: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz session for one category.
///
/// Steps through a pre-generated question sequence, tallying correct
/// answers. Sessions are transient: an abandoned session is simply dropped,
/// only the final correct count ever reaches the progress store.
pub struct QuizSession {
    category_id: CategoryId,
    questions: Vec<Question>,
    current: usize,
    correct_count: u32,
}

impl QuizSession {
    /// Create a new session over a generated question sequence.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions are provided.
    pub fn new(category_id: CategoryId, questions: Vec<Question>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            category_id,
            questions,
            current: 0,
            correct_count: 0,
        })
    }

    #[must_use]
    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Number of questions already answered.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.current
    }

    /// Number of questions not answered yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.questions.len().saturating_sub(self.current)
    }

    /// Running count of correct answers; final value feeds the progress
    /// store on completion.
    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current >= self.questions.len()
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.total_questions(),
            answered: self.answered_count(),
            remaining: self.remaining(),
            is_complete: self.is_complete(),
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// Apply a selected option index to the current question and advance.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already finished
    /// and `SessionError::InvalidAnswer` if `selected` is not a valid option
    /// index.
    pub fn answer_current(&mut self, selected: usize) -> Result<AnswerFeedback, SessionError> {
        let Some(question) = self.questions.get(self.current) else {
            return Err(SessionError::Completed);
        };
        if selected >= ANSWERS_PER_QUESTION {
            return Err(SessionError::InvalidAnswer { selected });
        }

        let is_correct = question.is_correct(selected);
        if is_correct {
            self.correct_count += 1;
        }

        let feedback = AnswerFeedback {
            question_index: self.current,
            selected,
            correct_index: question.correct_index(),
            is_correct,
            session_complete: self.current + 1 >= self.questions.len(),
        };

        self.current += 1;
        Ok(feedback)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("category_id", &self.category_id)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("correct_count", &self.correct_count)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
