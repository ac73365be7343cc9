use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::db::{self, try_lock};
use crate::domain::Category;
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/categories` - every category regardless of language.
pub async fn get_categories(
  State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, ApiError> {
  let conn = try_lock(&state.pool)?;
  let categories = db::get_all_categories(&conn)?;
  Ok(Json(categories))
}

/// `GET /api/categories/{language}` - categories that have at least one
/// word in the given language.
pub async fn get_categories_for_language(
  State(state): State<AppState>,
  Path(language): Path<String>,
) -> Result<Json<Vec<Category>>, ApiError> {
  let conn = try_lock(&state.pool)?;
  if db::find_language(&conn, &language)?.is_none() {
    return Err(ApiError::not_found(format!("Language ({}) not found", language)));
  }
  let categories = db::get_categories_for_language(&conn, &language)?;
  Ok(Json(categories))
}

#[derive(Deserialize)]
pub struct NewCategoryRequest {
  pub category_name: String,
}

/// `POST /api/categories`
pub async fn add_category(
  State(state): State<AppState>,
  Json(req): Json<NewCategoryRequest>,
) -> Result<Json<Category>, ApiError> {
  if req.category_name.trim().is_empty() {
    return Err(ApiError::bad_request("Category name is required"));
  }

  let conn = try_lock(&state.pool)?;
  let category_id = db::ensure_category(&conn, &req.category_name)?;
  tracing::info!(category = %req.category_name, "created category");
  Ok(Json(Category {
    category_id,
    category_name: req.category_name,
  }))
}
