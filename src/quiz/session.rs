//! Quiz session state machine.
//!
//! A session takes a pool snapshot at creation and walks it strictly
//! forward: `submit_answer` is the sole mutator, appending one
//! [`AnsweredQuestion`] and advancing the index. A session with
//! `answers.len() == pool.len()` is complete; there is no way out of that
//! state - finished sessions are discarded and a new one is created to
//! play again.

use serde::Serialize;

use crate::domain::{Direction, VocabularyItem};
use crate::validation::validate_answer;

/// One submitted answer, judged. Append-only and immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnsweredQuestion {
  pub question: String,
  pub expected_answer: String,
  pub submitted_answer: String,
  pub is_correct: bool,
}

/// Running tally of a session. `total` is the pool size, not the number of
/// answers given, so an abandoned session scores against what it set out
/// to cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
  pub correct: usize,
  pub total: usize,
}

/// Error for a submit on an already completed session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCompleteError;

impl std::fmt::Display for SessionCompleteError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "Quiz session already complete")
  }
}

impl std::error::Error for SessionCompleteError {}

/// One student's run through a pool.
#[derive(Debug, Clone)]
pub struct QuizSession {
  pub language_name: String,
  pub direction: Direction,
  pool: Vec<VocabularyItem>,
  current_index: usize,
  answers: Vec<AnsweredQuestion>,
}

impl QuizSession {
  /// Snapshot `pool` and start at the first item. An empty pool yields a
  /// session that is complete from the start with a 0/0 score.
  pub fn new(language_name: String, direction: Direction, pool: Vec<VocabularyItem>) -> Self {
    Self {
      language_name,
      direction,
      pool,
      current_index: 0,
      answers: Vec::new(),
    }
  }

  pub fn is_complete(&self) -> bool {
    self.current_index == self.pool.len()
  }

  /// The question text the student should currently see, or `None` when
  /// the session is complete.
  pub fn current_question(&self) -> Option<&str> {
    self
      .pool
      .get(self.current_index)
      .map(|item| self.direction.question(item))
  }

  /// Judge `submitted` against the current item, record it, and advance.
  pub fn submit_answer(&mut self, submitted: &str) -> Result<&AnsweredQuestion, SessionCompleteError> {
    let item = self.pool.get(self.current_index).ok_or(SessionCompleteError)?;

    let question = self.direction.question(item).to_string();
    let expected = self.direction.expected(item).to_string();
    let is_correct = validate_answer(submitted, &expected);

    self.answers.push(AnsweredQuestion {
      question,
      expected_answer: expected,
      submitted_answer: submitted.to_string(),
      is_correct,
    });
    self.current_index += 1;

    Ok(self.answers.last().expect("answer just pushed"))
  }

  /// Valid in any state; `total` stays the pool size even mid-quiz.
  pub fn score(&self) -> Score {
    Score {
      correct: self.answers.iter().filter(|a| a.is_correct).count(),
      total: self.pool.len(),
    }
  }

  pub fn answers(&self) -> &[AnsweredQuestion] {
    &self.answers
  }

  pub fn pool_len(&self) -> usize {
    self.pool.len()
  }
}
