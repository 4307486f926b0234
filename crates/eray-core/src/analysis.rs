//! Post-session performance analysis.
//!
//! Reduces a finished session's results to totals, timing, a letter grade,
//! per-part-of-speech strengths and weaknesses, answer streaks, and textual
//! study recommendations. Everything here is derived; the analyzer holds no
//! state beyond its policy thresholds.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::VocabularyEntry;
use crate::scoring::{calculate_score, Grade};
use crate::session::QuizResult;

/// Policy thresholds for the analyzer.
///
/// These are behavior constants, not derived from any model: an answer is
/// "slow" when it takes strictly more than `slow_answer_ms`; a part of
/// speech is a strength at accuracy ≥ `strength_accuracy` and a weakness
/// below `weakness_accuracy`, and either classification needs at least
/// `min_samples` answers to count.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// An answer slower than this (strictly) counts as slow.
    pub slow_answer_ms: u64,
    /// Share of slow answers (strictly) above which speed practice is
    /// recommended.
    pub slow_share: f64,
    /// Share of incorrect answers (strictly) above which review is
    /// recommended.
    pub incorrect_share: f64,
    /// Minimum per-bucket accuracy for a strength.
    pub strength_accuracy: f64,
    /// Accuracy below which a bucket is a weakness.
    pub weakness_accuracy: f64,
    /// Minimum answers in a bucket before it is classified either way.
    pub min_samples: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            slow_answer_ms: 15_000,
            slow_share: 0.4,
            incorrect_share: 0.5,
            strength_accuracy: 0.8,
            weakness_accuracy: 0.5,
            min_samples: 2,
        }
    }
}

/// Summary of a finished session, derived entirely from its results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizPerformance {
    /// Number of answered questions.
    pub total_questions: usize,
    /// Number answered correctly.
    pub correct_answers: usize,
    /// Percentage accuracy, 0–100.
    pub accuracy: u8,
    /// Total time across all answers, in milliseconds.
    pub total_time_ms: u64,
    /// Average time per answer, rounded to whole seconds.
    pub average_time_secs: u64,
    /// Letter grade; `None` when nothing was answered.
    pub grade: Option<Grade>,
    /// Part-of-speech buckets the learner did well in.
    pub strengths: Vec<String>,
    /// Part-of-speech buckets the learner struggled with.
    pub weaknesses: Vec<String>,
}

impl QuizPerformance {
    /// Grade as display text, `"N/A"` when absent.
    pub fn grade_label(&self) -> String {
        match self.grade {
            Some(grade) => grade.to_string(),
            None => "N/A".to_string(),
        }
    }

    fn empty() -> Self {
        Self {
            total_questions: 0,
            correct_answers: 0,
            accuracy: 0,
            total_time_ms: 0,
            average_time_secs: 0,
            grade: None,
            strengths: Vec::new(),
            weaknesses: Vec::new(),
        }
    }
}

/// Whether a streak is a run of correct or incorrect answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakKind {
    Correct,
    Incorrect,
    None,
}

/// Runs of same-outcome answers in a result list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Streak {
    /// Length of the run ending at the most recent answer.
    pub current: usize,
    /// Length of the longest same-outcome run anywhere in the list.
    pub longest: usize,
    /// Outcome of the current run.
    pub kind: StreakKind,
}

/// Compute the current and longest answer streaks.
pub fn calculate_streak(results: &[QuizResult]) -> Streak {
    let Some(last) = results.last() else {
        return Streak {
            current: 0,
            longest: 0,
            kind: StreakKind::None,
        };
    };

    let current = results
        .iter()
        .rev()
        .take_while(|r| r.is_correct == last.is_correct)
        .count();

    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<bool> = None;
    for result in results {
        if prev == Some(result.is_correct) || prev.is_none() {
            run += 1;
        } else {
            longest = longest.max(run);
            run = 1;
        }
        prev = Some(result.is_correct);
    }
    longest = longest.max(run);

    Streak {
        current,
        longest,
        kind: if last.is_correct {
            StreakKind::Correct
        } else {
            StreakKind::Incorrect
        },
    }
}

/// Derives `QuizPerformance` summaries and study recommendations.
#[derive(Debug, Clone, Default)]
pub struct PerformanceAnalyzer {
    config: AnalyzerConfig,
}

impl PerformanceAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Summarize a result list against the entries it was drawn from.
    ///
    /// Empty results yield a zeroed summary with no grade rather than an
    /// error.
    pub fn analyze(&self, results: &[QuizResult], entries: &[VocabularyEntry]) -> QuizPerformance {
        if results.is_empty() {
            return QuizPerformance::empty();
        }

        let total_time_ms: u64 = results.iter().map(|r| r.time_spent_ms).sum();
        let average_time_secs =
            (total_time_ms as f64 / results.len() as f64 / 1000.0).round() as u64;
        let accuracy = calculate_score(results);
        let correct_answers = results.iter().filter(|r| r.is_correct).count();
        let (strengths, weaknesses) = self.classify_by_part_of_speech(results, entries);

        QuizPerformance {
            total_questions: results.len(),
            correct_answers,
            accuracy,
            total_time_ms,
            average_time_secs,
            grade: Some(Grade::from_score(accuracy)),
            strengths,
            weaknesses,
        }
    }

    /// Human-readable study suggestions for a finished session.
    ///
    /// Advisory text only. A flawless session gets a single congratulation;
    /// otherwise suggestions accumulate for slow answering (share of answers
    /// over the slow threshold), a high miss rate, and any weak
    /// part-of-speech buckets.
    pub fn study_recommendations(
        &self,
        results: &[QuizResult],
        entries: &[VocabularyEntry],
    ) -> Vec<String> {
        let incorrect = results.iter().filter(|r| !r.is_correct).count();
        if incorrect == 0 {
            return vec!["Excellent work! Try a more challenging category.".to_string()];
        }

        let mut recommendations = Vec::new();
        let total = results.len() as f64;

        let slow = results
            .iter()
            .filter(|r| r.time_spent_ms > self.config.slow_answer_ms)
            .count();
        if slow as f64 > total * self.config.slow_share {
            recommendations
                .push("Practice with flashcards to improve recognition speed".to_string());
        }

        if incorrect as f64 > total * self.config.incorrect_share {
            recommendations.push("Review the vocabulary words in this category".to_string());
            recommendations
                .push("Use the pronunciation feature to learn correct sounds".to_string());
        }

        let (_, weaknesses) = self.classify_by_part_of_speech(results, entries);
        if !weaknesses.is_empty() {
            recommendations.push(format!("Focus on: {}", weaknesses.join(", ")));
        }

        recommendations
    }

    /// Group results into part-of-speech buckets and classify each bucket.
    ///
    /// Results whose entry cannot be found, or whose entry has no
    /// part-of-speech tag, land in an `unknown` bucket. Buckets with fewer
    /// than `min_samples` answers are excluded from both lists.
    fn classify_by_part_of_speech(
        &self,
        results: &[QuizResult],
        entries: &[VocabularyEntry],
    ) -> (Vec<String>, Vec<String>) {
        let mut buckets: BTreeMap<&str, (usize, usize)> = BTreeMap::new();

        for result in results {
            let label = entries
                .iter()
                .find(|e| e.id == result.entry_id)
                .and_then(|e| e.part_of_speech)
                .map(|pos| pos.bilingual_label())
                .unwrap_or("unknown");

            let (correct, total) = buckets.entry(label).or_insert((0, 0));
            *total += 1;
            if result.is_correct {
                *correct += 1;
            }
        }

        let mut strengths = Vec::new();
        let mut weaknesses = Vec::new();
        for (label, (correct, total)) in buckets {
            if total < self.config.min_samples {
                continue;
            }
            let accuracy = correct as f64 / total as f64;
            if accuracy >= self.config.strength_accuracy {
                strengths.push(format!("{label} ({correct}/{total})"));
            } else if accuracy < self.config.weakness_accuracy {
                weaknesses.push(format!("{label} ({correct}/{total})"));
            }
        }

        (strengths, weaknesses)
    }
}
