use std::collections::HashSet;
use thiserror::Error;

use crate::model::animal::Animal;
use crate::model::ids::CategoryId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryError {
    #[error("category name cannot be empty")]
    EmptyName,
}

/// A themed group of animals used as one quiz unit.
///
/// Categories are immutable reference data. Premium categories are listed in
/// the catalog but can never be unlocked through play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    name: String,
    emoji: String,
    premium: bool,
    animals: Vec<Animal>,
}

impl Category {
    /// Creates a new Category.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::EmptyName` if name is empty or whitespace-only.
    pub fn new(
        id: CategoryId,
        name: impl Into<String>,
        emoji: impl Into<String>,
        premium: bool,
        animals: Vec<Animal>,
    ) -> Result<Self, CategoryError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CategoryError::EmptyName);
        }

        Ok(Self {
            id,
            name: name.trim().to_owned(),
            emoji: emoji.into(),
            premium,
            animals,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> CategoryId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    #[must_use]
    pub fn is_premium(&self) -> bool {
        self.premium
    }

    #[must_use]
    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    /// The validated pool used for question generation: quizzable entries,
    /// deduplicated by id keeping the first occurrence.
    ///
    /// Deduplicating up front guarantees that any pool of 4 or more entries
    /// can supply three genuinely distinct distractors per question.
    #[must_use]
    pub fn quiz_pool(&self) -> Vec<Animal> {
        let mut seen = HashSet::new();
        self.animals
            .iter()
            .filter(|animal| animal.is_quizzable() && seen.insert(animal.id()))
            .cloned()
            .collect()
    }
}
