use crate::model::ids::AnimalId;

/// One animal entry from the content set.
///
/// Reference data is trusted for shape but not for quality: entries can ship
/// with blank names or missing image references, so usability is a predicate
/// (`is_quizzable`) checked at question-generation time rather than a
/// constructor failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    id: AnimalId,
    name: String,
    image: String,
}

impl Animal {
    /// Creates a new animal entry. Name and image are trimmed as-is;
    /// no validation happens here.
    #[must_use]
    pub fn new(id: AnimalId, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into().trim().to_owned(),
            image: image.into().trim().to_owned(),
        }
    }

    #[must_use]
    pub fn id(&self) -> AnimalId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Opaque image reference, resolved by the presentation layer.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// True when the entry can appear in a quiz: both name and image present.
    #[must_use]
    pub fn is_quizzable(&self) -> bool {
        !self.name.is_empty() && !self.image.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animal_trims_fields() {
        let animal = Animal::new(AnimalId::new(1), "  Horse  ", " https://img/horse.jpg ");
        assert_eq!(animal.name(), "Horse");
        assert_eq!(animal.image(), "https://img/horse.jpg");
    }

    #[test]
    fn animal_with_blank_name_is_not_quizzable() {
        let animal = Animal::new(AnimalId::new(1), "   ", "https://img/x.jpg");
        assert!(!animal.is_quizzable());
    }

    #[test]
    fn animal_with_missing_image_is_not_quizzable() {
        let animal = Animal::new(AnimalId::new(1), "Horse", "");
        assert!(!animal.is_quizzable());
    }

    #[test]
    fn complete_animal_is_quizzable() {
        let animal = Animal::new(AnimalId::new(1), "Horse", "https://img/horse.jpg");
        assert!(animal.is_quizzable());
    }
}
