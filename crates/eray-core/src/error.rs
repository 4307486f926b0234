//! Engine error types.
//!
//! `QuizError` covers every failure the engine itself can produce. Callers
//! are expected to check `is_insufficient_data` before starting a quiz so the
//! surrounding UI can disable quiz entry instead of surfacing an error.

use thiserror::Error;

/// Errors produced by quiz generation and session bookkeeping.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Fewer vocabulary entries were supplied than a multiple-choice
    /// question needs (one correct answer plus three distractors).
    #[error("need at least {needed} vocabulary entries to build a quiz, got {available}")]
    InsufficientData { available: usize, needed: usize },

    /// The entry pool is large enough, but too many entries share the same
    /// answer text to fill three distinct wrong options.
    #[error("not enough distinct distractor values for \"{term}\"")]
    InsufficientDistractors { term: String },

    /// An answer was recorded against a session whose every question has
    /// already been answered.
    #[error("session already has an answer for every question")]
    SessionComplete,

    /// A quiz configuration violated its bounds.
    #[error("invalid quiz configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl QuizError {
    /// Returns `true` if this error means the vocabulary pool cannot support
    /// quiz generation at all, as opposed to a caller-side misuse.
    pub fn is_insufficient_data(&self) -> bool {
        matches!(
            self,
            QuizError::InsufficientData { .. } | QuizError::InsufficientDistractors { .. }
        )
    }
}
