//! Quiz question selection.
//!
//! Picks one unseen question uniformly at random, or signals that the quiz
//! is over. Running out of questions is a normal outcome, not an error: an
//! exhausted category and a category with no questions at all look
//! identical to the player.
//!
//! The RNG is injected so hosts can use entropy while tests seed a
//! deterministic generator.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::TriviaError;
use crate::model::{Question, QuizState};
use crate::store::QuestionStore;

/// Choose one question from `pool` that has not been served yet.
///
/// Every remaining candidate is equally likely, regardless of how large the
/// pool was before exclusion. Returns `None` when nothing is left to serve.
///
/// `state` is never mutated: the caller appends the returned question's id
/// via [`QuizState::record`] before the next draw.
pub fn draw<R: Rng + ?Sized>(
    pool: &[Question],
    state: &QuizState,
    rng: &mut R,
) -> Option<Question> {
    let candidates: Vec<&Question> = pool.iter().filter(|q| !state.was_asked(q.id)).collect();
    candidates.choose(rng).map(|q| (*q).clone())
}

/// Resolve the candidate pool from the store and draw the next question.
///
/// With `state.category` set, the pool is that category's questions
/// (filtered by the store, which is functionally identical to filtering a
/// full scan in memory); otherwise it is every question. A category id that
/// matches nothing yields `Ok(None)` immediately rather than an error.
pub async fn next_question<R: Rng + ?Sized>(
    store: &dyn QuestionStore,
    state: &QuizState,
    rng: &mut R,
) -> Result<Option<Question>, TriviaError> {
    let pool = match state.category {
        Some(category) => store.list_by_category(category).await?,
        None => store.list_all().await?,
    };
    Ok(draw(&pool, state, rng))
}
