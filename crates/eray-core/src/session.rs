//! Quiz session types and lifecycle.
//!
//! A `QuizSession` is an explicitly owned value: the caller constructs it
//! from generated questions, appends one `QuizResult` per answered question
//! through `record_answer`, and the session freezes itself once every
//! question has an answer. Nothing here is shared or global; the surrounding
//! application owns the session for its whole lifetime.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::QuizError;
use crate::model::Direction;
use crate::scoring::calculate_score;

/// One generated multiple-choice question.
///
/// Exactly 4 options, containing the correct answer exactly once. Immutable
/// after generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Question identifier, unique within its session (`q_1`, `q_2`, ...).
    pub id: String,
    /// Identifier of the vocabulary entry this question was built from.
    pub entry_id: String,
    /// Rendered question text.
    pub question: String,
    /// Answer options in display order.
    pub options: Vec<String>,
    /// The correct answer string.
    pub correct_answer: String,
    /// Which language the question prompts in and expects back.
    pub direction: Direction,
}

/// The outcome of answering one question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResult {
    /// The question this result answers.
    pub question_id: String,
    /// The vocabulary entry the question was built from. Carried here so
    /// analysis and adaptive generation can match results back to entries
    /// without re-resolving question ids.
    pub entry_id: String,
    /// What the learner submitted (empty on timeout or skip).
    pub submitted_answer: String,
    /// The expected answer.
    pub correct_answer: String,
    /// Whether the normalized submitted answer matched.
    pub is_correct: bool,
    /// Time taken to answer, in milliseconds.
    pub time_spent_ms: u64,
}

/// Normalize and compare a submitted answer against the expected one.
///
/// Both sides are trimmed and Unicode-lowercased before comparison, so
/// `" Hello "` matches `"hello"`. An empty submission only matches an empty
/// expected answer.
pub fn validate_answer(submitted: &str, expected: &str) -> bool {
    submitted.trim().to_lowercase() == expected.trim().to_lowercase()
}

/// A bounded run of questions and the answers recorded against them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSession {
    /// Unique session identifier.
    pub id: Uuid,
    /// Category the quiz was drawn from.
    pub category_id: String,
    /// Questions in the order they are asked.
    pub questions: Vec<QuizQuestion>,
    /// One result per answered question, in question order.
    pub results: Vec<QuizResult>,
    /// When the session started.
    pub started_at: DateTime<Utc>,
    /// When the last question was answered, if the session is complete.
    pub ended_at: Option<DateTime<Utc>>,
    /// Percentage score over the results recorded so far.
    pub score: u8,
}

impl QuizSession {
    /// Start a new session over a generated question list.
    pub fn new(category_id: impl Into<String>, questions: Vec<QuizQuestion>) -> Self {
        Self {
            id: Uuid::new_v4(),
            category_id: category_id.into(),
            questions,
            results: Vec::new(),
            started_at: Utc::now(),
            ended_at: None,
            score: 0,
        }
    }

    /// The next unanswered question, or `None` once the session is complete.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.results.len())
    }

    /// Number of questions still unanswered.
    pub fn remaining(&self) -> usize {
        self.questions.len() - self.results.len()
    }

    /// `true` once every question has a recorded result.
    pub fn is_complete(&self) -> bool {
        self.results.len() == self.questions.len()
    }

    /// Grade and record an answer to the current question.
    ///
    /// Appends a `QuizResult`, recomputes the running score, and stamps
    /// `ended_at` when the last question is answered. Fails with
    /// `SessionComplete` if there is no question left to answer.
    pub fn record_answer(
        &mut self,
        submitted: &str,
        time_spent_ms: u64,
    ) -> Result<&QuizResult, QuizError> {
        let question = self
            .questions
            .get(self.results.len())
            .ok_or(QuizError::SessionComplete)?;

        let result = QuizResult {
            question_id: question.id.clone(),
            entry_id: question.entry_id.clone(),
            submitted_answer: submitted.to_string(),
            correct_answer: question.correct_answer.clone(),
            is_correct: validate_answer(submitted, &question.correct_answer),
            time_spent_ms,
        };
        let index = self.results.len();
        self.results.push(result);
        self.score = calculate_score(&self.results);

        if self.is_complete() {
            self.ended_at = Some(Utc::now());
            tracing::debug!(session = %self.id, score = self.score, "session complete");
        }

        Ok(&self.results[index])
    }

    /// Save the session as pretty-printed JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize session")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write session to {}", path.display()))?;
        Ok(())
    }

    /// Load a session from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read session from {}", path.display()))?;
        let session: QuizSession =
            serde_json::from_str(&content).context("failed to parse session JSON")?;
        Ok(session)
    }
}
