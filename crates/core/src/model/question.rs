use thiserror::Error;

use crate::model::animal::Animal;

/// Number of answer options shown per question.
pub const ANSWERS_PER_QUESTION: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("expected {expected} answer options, got {got}")]
    WrongAnswerCount { expected: usize, got: usize },

    #[error("answer options contain a duplicate animal id")]
    DuplicateAnswer,

    #[error("no answer option matches the correct animal")]
    MissingCorrectAnswer,
}

/// One multiple-choice question: a target animal plus four shuffled options,
/// exactly one of which is the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    correct_animal: Animal,
    answers: Vec<Animal>,
    correct_index: usize,
}

impl Question {
    /// Builds a question from a pre-shuffled option list, deriving the index
    /// of the correct option.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the option list is not exactly
    /// [`ANSWERS_PER_QUESTION`] long, contains duplicate ids, or does not
    /// contain the correct animal.
    pub fn new(correct_animal: Animal, answers: Vec<Animal>) -> Result<Self, QuestionError> {
        if answers.len() != ANSWERS_PER_QUESTION {
            return Err(QuestionError::WrongAnswerCount {
                expected: ANSWERS_PER_QUESTION,
                got: answers.len(),
            });
        }

        for (i, answer) in answers.iter().enumerate() {
            if answers[..i].iter().any(|other| other.id() == answer.id()) {
                return Err(QuestionError::DuplicateAnswer);
            }
        }

        let correct_index = answers
            .iter()
            .position(|answer| answer.id() == correct_animal.id())
            .ok_or(QuestionError::MissingCorrectAnswer)?;

        Ok(Self {
            correct_animal,
            answers,
            correct_index,
        })
    }

    #[must_use]
    pub fn correct_animal(&self) -> &Animal {
        &self.correct_animal
    }

    #[must_use]
    pub fn answers(&self) -> &[Animal] {
        &self.answers
    }

    /// Index of the correct option within [`answers`](Self::answers).
    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// True when `selected` picks the correct option.
    #[must_use]
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ids::AnimalId;

    fn animal(id: u32, name: &str) -> Animal {
        Animal::new(AnimalId::new(id), name, format!("https://img/{id}.jpg"))
    }

    fn four_answers() -> Vec<Animal> {
        vec![
            animal(2, "Cow"),
            animal(1, "Horse"),
            animal(3, "Pig"),
            animal(4, "Sheep"),
        ]
    }

    #[test]
    fn question_derives_correct_index() {
        let question = Question::new(animal(1, "Horse"), four_answers()).unwrap();
        assert_eq!(question.correct_index(), 1);
        assert!(question.is_correct(1));
        assert!(!question.is_correct(0));
    }

    #[test]
    fn question_rejects_wrong_answer_count() {
        let err = Question::new(animal(1, "Horse"), four_answers()[..3].to_vec()).unwrap_err();
        assert_eq!(
            err,
            QuestionError::WrongAnswerCount {
                expected: 4,
                got: 3
            }
        );
    }

    #[test]
    fn question_rejects_duplicate_ids() {
        let mut answers = four_answers();
        answers[3] = animal(2, "Bull");
        let err = Question::new(animal(1, "Horse"), answers).unwrap_err();
        assert_eq!(err, QuestionError::DuplicateAnswer);
    }

    #[test]
    fn question_rejects_missing_correct_animal() {
        let err = Question::new(animal(9, "Goat"), four_answers()).unwrap_err();
        assert_eq!(err, QuestionError::MissingCorrectAnswer);
    }
}
