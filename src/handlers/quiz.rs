//! Quiz flow: start a session, answer questions, read the score.
//!
//! Sessions are identified by an opaque ID carried in request bodies.
//! Answering grades the submission server-side against the session's own
//! pool snapshot, so the expected answer never depends on what the client
//! sends beyond the answer text itself.

use std::collections::HashSet;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::Direction;
use crate::error::ApiError;
use crate::quiz::{AnsweredQuestion, QuizSession, Score, SessionCompleteError};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct StartQuizRequest {
  pub language: String,
  #[serde(default)]
  pub categories: Vec<i64>,
  #[serde(default)]
  pub direction: Direction,
}

#[derive(Serialize)]
pub struct StartQuizResponse {
  pub session_id: String,
  pub total: usize,
  /// `None` when the selection produced an empty pool; the session is
  /// already complete in that case.
  pub question: Option<String>,
}

/// `POST /api/quiz/start`
pub async fn start_quiz(
  State(state): State<AppState>,
  Json(req): Json<StartQuizRequest>,
) -> Result<Json<StartQuizResponse>, ApiError> {
  let categories: HashSet<i64> = req.categories.iter().copied().collect();
  let pool = state.pool_selector().select_pool(&req.language, &categories)?;

  let session = QuizSession::new(req.language, req.direction, pool);
  let total = session.pool_len();
  let question = session.current_question().map(str::to_string);
  let session_id = state.sessions.insert(session);

  tracing::info!(%session_id, total, "quiz session started");
  Ok(Json(StartQuizResponse { session_id, total, question }))
}

#[derive(Deserialize)]
pub struct AnswerRequest {
  pub session_id: String,
  pub answer: String,
}

#[derive(Serialize)]
pub struct AnswerResponse {
  pub answered: AnsweredQuestion,
  pub next_question: Option<String>,
  pub complete: bool,
  pub score: Score,
}

/// `POST /api/quiz/answer`
pub async fn submit_quiz_answer(
  State(state): State<AppState>,
  Json(req): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>, ApiError> {
  let outcome: Option<Result<AnswerResponse, SessionCompleteError>> =
    state.sessions.with_session(&req.session_id, |session| {
      let answered = session.submit_answer(&req.answer)?.clone();
      Ok(AnswerResponse {
        answered,
        next_question: session.current_question().map(str::to_string),
        complete: session.is_complete(),
        score: session.score(),
      })
    });

  match outcome {
    None => Err(ApiError::not_found(format!(
      "Quiz session ({}) not found",
      req.session_id
    ))),
    Some(Err(_)) => Err(ApiError::session_complete()),
    Some(Ok(response)) => Ok(Json(response)),
  }
}

#[derive(Serialize)]
pub struct ScoreResponse {
  pub correct: usize,
  pub total: usize,
  pub complete: bool,
}

/// `GET /api/quiz/{session_id}/score` - valid in any session state.
pub async fn get_quiz_score(
  State(state): State<AppState>,
  Path(session_id): Path<String>,
) -> Result<Json<ScoreResponse>, ApiError> {
  let session = state
    .sessions
    .get(&session_id)
    .ok_or_else(|| ApiError::not_found(format!("Quiz session ({}) not found", session_id)))?;

  let score = session.score();
  Ok(Json(ScoreResponse {
    correct: score.correct,
    total: score.total,
    complete: session.is_complete(),
  }))
}
