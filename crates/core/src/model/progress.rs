use std::collections::BTreeMap;

use crate::model::ids::CategoryId;

/// Questions asked in one complete session.
pub const QUESTIONS_PER_SESSION: u32 = 10;

/// Highest category reachable through play. Categories past the cap are
/// premium content with no unlock path.
pub const UNLOCK_CAP: u32 = 5;

//
// ─── STAR RATING ───────────────────────────────────────────────────────────────
//

/// Best-session score for a category, 0 to 3 stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StarRating {
    Zero,
    One,
    Two,
    Three,
}

impl StarRating {
    /// Scores a finished session by its correct-answer count:
    /// a perfect session earns three stars, two or more correct two,
    /// exactly one correct one, and zero correct none.
    #[must_use]
    pub fn from_correct_count(correct_count: u32) -> Self {
        match correct_count {
            0 => Self::Zero,
            1 => Self::One,
            QUESTIONS_PER_SESSION => Self::Three,
            _ => Self::Two,
        }
    }

    #[must_use]
    pub fn value(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Zero),
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            _ => None,
        }
    }
}

//
// ─── PLAYER PROGRESS ───────────────────────────────────────────────────────────
//

/// Outcome of recording one finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCompletion {
    /// Stars earned by this session.
    pub stars: StarRating,
    /// Best rating recorded for the category after applying the max rule.
    pub best_stars: StarRating,
    /// New `unlocked_categories` value when this session raised it.
    pub newly_unlocked: Option<u32>,
}

/// Persistent player progress: unlock front, per-category best stars,
/// lifetime counters, and the cosmetic background preference.
///
/// All mutation goes through the operations below; ratings only ever improve
/// and counters only ever grow, except through [`Default`] on explicit reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerProgress {
    unlocked_categories: u32,
    category_stars: BTreeMap<CategoryId, StarRating>,
    total_attempts: u64,
    correct_answers: u64,
    background_gradient: Vec<String>,
}

impl Default for PlayerProgress {
    fn default() -> Self {
        Self {
            unlocked_categories: 1,
            category_stars: BTreeMap::new(),
            total_attempts: 0,
            correct_answers: 0,
            background_gradient: default_gradient(),
        }
    }
}

/// The stock "nature" gradient the app starts with.
#[must_use]
pub fn default_gradient() -> Vec<String> {
    vec!["#1B5E20".to_owned(), "#5D4037".to_owned()]
}

impl PlayerProgress {
    /// Rehydrates progress from already-validated persisted fields.
    #[must_use]
    pub fn from_persisted(
        unlocked_categories: u32,
        category_stars: BTreeMap<CategoryId, StarRating>,
        total_attempts: u64,
        correct_answers: u64,
        background_gradient: Vec<String>,
    ) -> Self {
        Self {
            unlocked_categories: unlocked_categories.max(1),
            category_stars,
            total_attempts,
            correct_answers,
            background_gradient,
        }
    }

    // Accessors
    #[must_use]
    pub fn unlocked_categories(&self) -> u32 {
        self.unlocked_categories
    }

    #[must_use]
    pub fn category_stars(&self) -> &BTreeMap<CategoryId, StarRating> {
        &self.category_stars
    }

    #[must_use]
    pub fn total_attempts(&self) -> u64 {
        self.total_attempts
    }

    #[must_use]
    pub fn correct_answers(&self) -> u64 {
        self.correct_answers
    }

    #[must_use]
    pub fn background_gradient(&self) -> &[String] {
        &self.background_gradient
    }

    /// Best rating ever recorded for a category; `Zero` when never attempted.
    #[must_use]
    pub fn stars_for(&self, category_id: CategoryId) -> StarRating {
        self.category_stars
            .get(&category_id)
            .copied()
            .unwrap_or(StarRating::Zero)
    }

    /// True when the category has been attempted at least once.
    #[must_use]
    pub fn has_attempted(&self, category_id: CategoryId) -> bool {
        self.category_stars.contains_key(&category_id)
    }

    /// A category is playable iff it sits at or below the unlock front.
    /// Premium gating is the catalog's concern, not progress state.
    #[must_use]
    pub fn is_unlocked(&self, category_id: CategoryId) -> bool {
        category_id.value() <= self.unlocked_categories
    }

    /// Sum of best ratings across attempted categories.
    #[must_use]
    pub fn total_stars(&self) -> u32 {
        self.category_stars
            .values()
            .map(|stars| u32::from(stars.value()))
            .sum()
    }

    /// Lifetime success rate in whole percent; 0 before the first session.
    #[must_use]
    pub fn success_rate_percent(&self) -> u32 {
        if self.total_attempts == 0 {
            return 0;
        }
        let rate = self.correct_answers as f64 / self.total_attempts as f64 * 100.0;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            rate.round() as u32
        }
    }

    /// Records one finished session for a category.
    ///
    /// Stars follow [`StarRating::from_correct_count`]; the recorded rating
    /// only ever improves. Counters grow unconditionally: attempts by a full
    /// session, correct answers by the reported count. A three-star clear
    /// advances the unlock front to `min(category_id + 1, UNLOCK_CAP)`,
    /// never lowering it.
    pub fn record_completion(
        &mut self,
        category_id: CategoryId,
        correct_count: u32,
    ) -> CategoryCompletion {
        let stars = StarRating::from_correct_count(correct_count);

        let best = self
            .category_stars
            .entry(category_id)
            .or_insert(StarRating::Zero);
        if stars > *best {
            *best = stars;
        }
        let best_stars = *best;

        self.total_attempts += u64::from(QUESTIONS_PER_SESSION);
        self.correct_answers += u64::from(correct_count);

        let mut newly_unlocked = None;
        if stars == StarRating::Three {
            let next = (category_id.value().saturating_add(1)).min(UNLOCK_CAP);
            if next > self.unlocked_categories {
                self.unlocked_categories = next;
                newly_unlocked = Some(next);
            }
        }

        CategoryCompletion {
            stars,
            best_stars,
            newly_unlocked,
        }
    }

    /// Replaces the cosmetic background preference, leaving everything else
    /// untouched. A gradient needs at least two colors; shorter input keeps
    /// the current preference so the persisted record never turns invalid.
    pub fn set_background_gradient(&mut self, colors: Vec<String>) {
        if colors.len() >= 2 {
            self.background_gradient = colors;
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
