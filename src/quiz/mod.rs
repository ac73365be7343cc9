//! The quiz core: pool selection and session scoring.

pub mod pool;
pub mod session;

pub use pool::PoolSelector;
pub use session::{AnsweredQuestion, QuizSession, Score, SessionCompleteError};
