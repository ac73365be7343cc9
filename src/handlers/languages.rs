//! Language curation handlers.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::db::{self, try_lock};
use crate::domain::{Language, LanguageSummary};
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/languages` - every language with its word count.
pub async fn get_languages(
  State(state): State<AppState>,
) -> Result<Json<Vec<LanguageSummary>>, ApiError> {
  let conn = try_lock(&state.pool)?;
  let languages = db::get_languages_with_word_count(&conn)?;
  Ok(Json(languages))
}

#[derive(Deserialize)]
pub struct NewLanguageRequest {
  pub language_name: String,
}

/// `POST /api/languages`
pub async fn add_language(
  State(state): State<AppState>,
  Json(req): Json<NewLanguageRequest>,
) -> Result<Json<Language>, ApiError> {
  if req.language_name.trim().is_empty() {
    return Err(ApiError::bad_request("Language name is required"));
  }

  let conn = try_lock(&state.pool)?;
  if db::find_language(&conn, &req.language_name)?.is_some() {
    return Err(ApiError::bad_request(format!(
      "Language ({}) already exists",
      req.language_name
    )));
  }

  let language = db::insert_language(&conn, &req.language_name)?;
  tracing::info!(language = %language.language_name, "created language");
  Ok(Json(language))
}

/// `DELETE /api/languages/{id}` - removes the language and its words.
pub async fn delete_language(
  State(state): State<AppState>,
  Path(language_id): Path<i64>,
) -> Result<axum::http::StatusCode, ApiError> {
  let conn = try_lock(&state.pool)?;
  let deleted = db::delete_language_by_id(&conn, language_id)?;
  if deleted == 0 {
    return Err(ApiError::not_found(format!("Language id ({}) not found", language_id)));
  }
  Ok(axum::http::StatusCode::NO_CONTENT)
}
