use std::collections::HashSet;
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::database::TriviaStore;
use crate::dto::quiz_dto::QuizCategory;
use crate::error::Result;
use crate::models::question::Question;

#[derive(Clone)]
pub struct QuizService {
    store: Arc<dyn TriviaStore>,
}

impl QuizService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// Draws a random question from `category` that is not in `previous`.
    ///
    /// `None` means the pool is exhausted and the quiz is over.
    pub async fn next_question(
        &self,
        category: QuizCategory,
        previous: &[i64],
    ) -> Result<Option<Question>> {
        let candidates = match category {
            QuizCategory::All => self.store.all_questions().await?,
            QuizCategory::Category(id) => self.store.questions_in_category(id).await?,
        };
        let picked = pick_unseen(candidates, previous, &mut rand::thread_rng());
        tracing::debug!(
            ?category,
            previous = previous.len(),
            picked = ?picked.as_ref().map(|q| q.id),
            "quiz draw"
        );
        Ok(picked)
    }
}

/// Uniformly picks one candidate whose id is not in `previous`.
pub fn pick_unseen<R: Rng + ?Sized>(
    candidates: Vec<Question>,
    previous: &[i64],
    rng: &mut R,
) -> Option<Question> {
    let seen: HashSet<i64> = previous.iter().copied().collect();
    let pool: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !seen.contains(&q.id))
        .collect();
    pool.choose(rng).cloned()
}
