pub mod categories;
pub mod languages;
pub mod quiz;
pub mod words;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::state::AppState;

pub use categories::{add_category, get_categories, get_categories_for_language};
pub use languages::{add_language, delete_language, get_languages};
pub use quiz::{get_quiz_score, start_quiz, submit_quiz_answer};
pub use words::{
  add_word, delete_word, fetch_exercise_pool, get_words_for_language, update_word,
  validate_single_word,
};

/// Full API route table, shared by the server binary and the tests.
pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/api/languages", get(get_languages).post(add_language))
    .route("/api/languages/{id}", delete(delete_language))
    .route("/api/categories", get(get_categories).post(add_category))
    .route("/api/categories/{language}", get(get_categories_for_language))
    .route("/api/words", post(fetch_exercise_pool))
    .route("/api/words/validate/{id}", post(validate_single_word))
    .route("/api/words/{language}", get(get_words_for_language))
    .route("/api/words/{language}/new", post(add_word))
    .route("/api/words/edit/{id}", put(update_word))
    .route("/api/words/delete/{id}", delete(delete_word))
    .route("/api/quiz/start", post(start_quiz))
    .route("/api/quiz/answer", post(submit_quiz_answer))
    .route("/api/quiz/{session_id}/score", get(get_quiz_score))
    .with_state(state)
}
