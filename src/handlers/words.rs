//! Word handlers: the exercise-pool endpoint, the legacy single-word
//! validation path, and curation CRUD.

use std::collections::HashSet;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::db::{self, try_lock};
use crate::domain::{WordSummary, WordWithCategory};
use crate::error::ApiError;
use crate::state::AppState;
use crate::store::StoreError;
use crate::validation::validate_answer;

#[derive(Deserialize)]
pub struct ExercisePoolRequest {
  pub language: String,
  #[serde(default)]
  pub categories: Vec<i64>,
}

/// `POST /api/words` - the pool a quiz view runs through. Category
/// metadata is stripped from the response; an empty `categories` list
/// selects every category of the language.
pub async fn fetch_exercise_pool(
  State(state): State<AppState>,
  Json(req): Json<ExercisePoolRequest>,
) -> Result<Json<Vec<WordSummary>>, ApiError> {
  let category_ids: HashSet<i64> = req.categories.into_iter().collect();
  let pool = state.pool_selector().select_pool(&req.language, &category_ids)?;
  Ok(Json(pool.iter().map(WordSummary::from).collect()))
}

#[derive(Deserialize)]
pub struct ValidateRequest {
  pub language: String,
  pub answer: String,
}

#[derive(Serialize)]
pub struct ValidateResponse {
  pub valid: bool,
}

/// `POST /api/words/validate/{id}` - legacy single-word validation.
///
/// Fetches the word fresh from storage and always grades against the
/// Finnish side, regardless of any quiz direction. A wrong answer is the
/// documented 400 `{"msg": "Validation failed"}`, not a 200.
pub async fn validate_single_word(
  State(state): State<AppState>,
  Path(word_id): Path<i64>,
  Json(req): Json<ValidateRequest>,
) -> Result<Json<ValidateResponse>, ApiError> {
  let word = match state.store.fetch_word_by_language_and_id(&req.language, word_id) {
    Ok(word) => word,
    Err(err @ (StoreError::LanguageNotFound(_) | StoreError::WordNotFound(_))) => {
      return Err(ApiError::not_found(err.to_string()));
    }
    Err(err) => return Err(err.into()),
  };

  if validate_answer(&req.answer, &word.finnish_word) {
    Ok(Json(ValidateResponse { valid: true }))
  } else {
    Err(ApiError::bad_request("Validation failed"))
  }
}

/// `GET /api/words/{language}` - curation listing with category names.
pub async fn get_words_for_language(
  State(state): State<AppState>,
  Path(language): Path<String>,
) -> Result<Json<Vec<WordWithCategory>>, ApiError> {
  let conn = try_lock(&state.pool)?;

  if db::find_language(&conn, &language)?.is_none() {
    return Err(ApiError::not_found(format!("Language ({}) not found", language)));
  }

  let words = db::get_words_by_language(&conn, &language)?;
  Ok(Json(words))
}

#[derive(Deserialize)]
pub struct NewWordRequest {
  pub category: String,
  pub foreign_word: String,
  pub finnish_word: String,
}

#[derive(Serialize)]
pub struct NewWordResponse {
  pub word_id: i64,
}

/// `POST /api/words/{language}/new` - create a word pair; the language and
/// category rows come into existence on first use.
pub async fn add_word(
  State(state): State<AppState>,
  Path(language): Path<String>,
  Json(req): Json<NewWordRequest>,
) -> Result<Json<NewWordResponse>, ApiError> {
  if req.foreign_word.trim().is_empty() || req.finnish_word.trim().is_empty() {
    return Err(ApiError::bad_request("Both words of a pair are required"));
  }

  let conn = try_lock(&state.pool)?;
  let word_id = db::save_word_pair(
    &conn,
    &language,
    &req.category,
    &req.foreign_word,
    &req.finnish_word,
  )?;

  tracing::info!(%language, word_id, "created word pair");
  Ok(Json(NewWordResponse { word_id }))
}

#[derive(Deserialize)]
pub struct UpdateWordRequest {
  pub foreign_word: Option<String>,
  pub finnish_word: Option<String>,
  pub category_id: Option<i64>,
}

/// `PUT /api/words/edit/{id}` - update the editable fields of a word pair.
pub async fn update_word(
  State(state): State<AppState>,
  Path(word_id): Path<i64>,
  Json(req): Json<UpdateWordRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
  if req.foreign_word.is_none() && req.finnish_word.is_none() && req.category_id.is_none() {
    return Err(ApiError::bad_request("No fields to update"));
  }

  let conn = try_lock(&state.pool)?;
  let changed = db::update_word(
    &conn,
    word_id,
    req.foreign_word.as_deref(),
    req.finnish_word.as_deref(),
    req.category_id,
  )?;

  if changed == 0 {
    return Err(ApiError::not_found(format!("ID ({}) not found", word_id)));
  }
  Ok(Json(serde_json::json!({ "updated": word_id })))
}

/// `DELETE /api/words/delete/{id}`
pub async fn delete_word(
  State(state): State<AppState>,
  Path(word_id): Path<i64>,
) -> Result<axum::http::StatusCode, ApiError> {
  let conn = try_lock(&state.pool)?;
  let deleted = db::delete_word_by_id(&conn, word_id)?;
  if deleted == 0 {
    return Err(ApiError::not_found(format!("ID ({}) not found", word_id)));
  }
  Ok(axum::http::StatusCode::NO_CONTENT)
}
