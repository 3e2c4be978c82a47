use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for an Animal
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnimalId(u32);

impl AnimalId {
    /// Creates a new `AnimalId`
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying u32 value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Unique identifier for a Category
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CategoryId(u32);

impl CategoryId {
    /// Creates a new `CategoryId`
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying u32 value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for AnimalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnimalId({})", self.0)
    }
}

impl fmt::Debug for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CategoryId({})", self.0)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for AnimalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── FromStr Implementations ───────────────────────────────────────────────────

/// Error type for parsing ID from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for AnimalId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>()
            .map(AnimalId::new)
            .map_err(|_| ParseIdError {
                kind: "AnimalId".to_string(),
            })
    }
}

impl FromStr for CategoryId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>()
            .map(CategoryId::new)
            .map_err(|_| ParseIdError {
                kind: "CategoryId".to_string(),
            })
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animal_id_display() {
        let id = AnimalId::new(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_animal_id_from_str() {
        let id: AnimalId = "123".parse().unwrap();
        assert_eq!(id, AnimalId::new(123));
    }

    #[test]
    fn test_animal_id_from_str_invalid() {
        let result = "not-a-number".parse::<AnimalId>();
        assert!(result.is_err());
    }

    #[test]
    fn test_category_id_display() {
        let id = CategoryId::new(5);
        assert_eq!(id.to_string(), "5");
    }

    #[test]
    fn test_category_id_from_str() {
        let id: CategoryId = "3".parse().unwrap();
        assert_eq!(id, CategoryId::new(3));
    }

    #[test]
    fn test_id_roundtrip() {
        let original = CategoryId::new(4);
        let serialized = original.to_string();
        let deserialized: CategoryId = serialized.parse().unwrap();
        assert_eq!(original, deserialized);
    }
}
