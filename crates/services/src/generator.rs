use rand::rng;
use rand::seq::{IndexedRandom, SliceRandom};

use quiz_core::model::{
    Animal, Category, Question, ANSWERS_PER_QUESTION, QUESTIONS_PER_SESSION,
};

use crate::error::GenerateError;

/// Builds a randomized question sequence for one category.
///
/// Works over the category's validated pool (quizzable entries, distinct
/// ids) and emits exactly `min(10, pool size)` questions, each with a
/// distinct correct animal, three distractors sampled without replacement
/// from the rest of the pool, and a shuffled option order. Uses non-seeded
/// randomness, so re-invocation yields a different sequence.
///
/// # Errors
///
/// Returns `GenerateError::InsufficientContent` when fewer than four usable
/// animals remain after validation; the caller should surface a retry
/// affordance.
pub fn generate_questions(category: &Category) -> Result<Vec<Question>, GenerateError> {
    let pool = category.quiz_pool();
    if pool.len() < ANSWERS_PER_QUESTION {
        return Err(GenerateError::InsufficientContent {
            available: pool.len(),
        });
    }

    let mut rng = rng();

    let mut order = pool.clone();
    order.shuffle(&mut rng);
    order.truncate(QUESTIONS_PER_SESSION as usize);

    let mut questions = Vec::with_capacity(order.len());
    for correct in order {
        let others: Vec<&Animal> = pool
            .iter()
            .filter(|animal| animal.id() != correct.id())
            .collect();
        let mut answers: Vec<Animal> = others
            .choose_multiple(&mut rng, ANSWERS_PER_QUESTION - 1)
            .map(|animal| (*animal).clone())
            .collect();
        answers.push(correct.clone());
        answers.shuffle(&mut rng);

        questions.push(Question::new(correct, answers)?);
    }

    Ok(questions)
}
