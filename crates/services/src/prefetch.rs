use std::collections::HashSet;
use std::time::Duration;

use quiz_core::model::Question;

/// Best-effort warm-up of answer images for a generated question set.
///
/// Failures never propagate: a missed prefetch only costs a slower first
/// render. Non-HTTP image references are skipped, since resolving them is
/// the presentation layer's job.
#[derive(Debug, Clone, Default)]
pub struct ImagePrefetcher {
    client: reqwest::Client,
}

impl ImagePrefetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch every distinct answer image once, ignoring all failures.
    pub async fn prefetch(&self, questions: &[Question]) {
        for url in prefetch_urls(questions) {
            let _ = self
                .client
                .get(&url)
                .timeout(Duration::from_secs(10))
                .send()
                .await;
        }
    }
}

/// Distinct HTTP image references across all answers, in question order.
fn prefetch_urls(questions: &[Question]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut urls = Vec::new();
    for question in questions {
        for animal in question.answers() {
            if animal.image().starts_with("http") && seen.insert(animal.id()) {
                urls.push(animal.image().to_owned());
            }
        }
    }
    urls
}
