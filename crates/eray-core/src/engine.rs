//! Multiple-choice question generation.
//!
//! `QuizEngine` turns a vocabulary pool into question sets: it shuffles and
//! takes entries without replacement, resolves a direction per question
//! (weighted when the mode is mixed), and draws three value-distinct
//! distractors per question from the full pool. The engine is generic over
//! its random source so tests can seed a `StdRng` and production callers use
//! `thread_rng`.

use std::collections::HashSet;

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::QuizError;
use crate::model::{Difficulty, Direction, QuizMode, VocabularyEntry};
use crate::session::{QuizQuestion, QuizResult};

/// Smallest pool a multiple-choice question can be built from: the correct
/// answer plus three distractors.
pub const MIN_POOL_SIZE: usize = 4;

const DISTRACTOR_COUNT: usize = 3;

/// Weighted direction distribution for mixed mode, in percent.
const DIRECTION_WEIGHTS: [(Direction, u32); 3] = [
    (Direction::SoToEn, 40),
    (Direction::EnToSo, 40),
    (Direction::Audio, 20),
];

/// Question generator over a pluggable random source.
pub struct QuizEngine<R: Rng> {
    rng: R,
}

impl QuizEngine<ThreadRng> {
    /// Engine backed by the thread-local generator.
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for QuizEngine<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> QuizEngine<R> {
    /// Engine backed by a caller-supplied generator. Tests pass a seeded
    /// `StdRng` to make shuffle-dependent output reproducible.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate up to `question_count` questions from the entry pool.
    ///
    /// Entries are selected by an unbiased shuffle-and-take, so no entry is
    /// asked twice in one call and the output length is
    /// `min(question_count, entries.len())`. Fails with `InsufficientData`
    /// when fewer than [`MIN_POOL_SIZE`] entries are supplied.
    pub fn generate_questions(
        &mut self,
        entries: &[VocabularyEntry],
        question_count: usize,
        mode: QuizMode,
    ) -> Result<Vec<QuizQuestion>, QuizError> {
        if entries.len() < MIN_POOL_SIZE {
            return Err(QuizError::InsufficientData {
                available: entries.len(),
                needed: MIN_POOL_SIZE,
            });
        }

        let mut selected: Vec<&VocabularyEntry> = entries.iter().collect();
        selected.shuffle(&mut self.rng);
        selected.truncate(question_count);

        let mut questions = Vec::with_capacity(selected.len());
        for (index, entry) in selected.iter().enumerate() {
            let direction = match mode.fixed_direction() {
                Some(direction) => direction,
                None => self.weighted_direction(),
            };

            let correct_answer = answer_for(entry, direction).to_string();
            let mut options = self.pick_distractors(entries, entry, direction)?;
            options.push(correct_answer.clone());
            options.shuffle(&mut self.rng);

            questions.push(QuizQuestion {
                id: format!("q_{}", index + 1),
                entry_id: entry.id.clone(),
                question: prompt_for(entry, direction),
                options,
                correct_answer,
                direction,
            });
        }

        tracing::debug!(count = questions.len(), %mode, "generated quiz questions");
        Ok(questions)
    }

    /// Generate a question set biased toward previously missed or harder
    /// entries.
    ///
    /// The candidate pool starts with every entry that was answered
    /// incorrectly in `previous_results`, plus entries tagged advanced or
    /// not tagged at all, then tops up from the rest of the pool in original
    /// order until `question_count` candidates are gathered. The assembled
    /// pool (not the full entry list) must still meet the
    /// [`MIN_POOL_SIZE`] precondition.
    pub fn generate_adaptive_questions(
        &mut self,
        entries: &[VocabularyEntry],
        previous_results: &[QuizResult],
        question_count: usize,
    ) -> Result<Vec<QuizQuestion>, QuizError> {
        let pool = assemble_adaptive_pool(entries, previous_results, question_count);
        tracing::debug!(
            pool = pool.len(),
            from = entries.len(),
            "assembled adaptive candidate pool"
        );
        self.generate_questions(&pool, question_count, QuizMode::Mixed)
    }

    /// Draw a direction from the mixed-mode weight table.
    fn weighted_direction(&mut self) -> Direction {
        let total: u32 = DIRECTION_WEIGHTS.iter().map(|(_, w)| w).sum();
        let roll = self.rng.gen_range(0..total);

        let mut cumulative = 0;
        for (direction, weight) in DIRECTION_WEIGHTS {
            cumulative += weight;
            if roll < cumulative {
                return direction;
            }
        }
        Direction::SoToEn
    }

    /// Pick three distinct wrong options from the pool for one question.
    ///
    /// Candidates are the answer values of every other entry under the same
    /// direction, minus empties, the correct answer itself, and duplicates,
    /// so an option list can never repeat a value.
    fn pick_distractors(
        &mut self,
        pool: &[VocabularyEntry],
        target: &VocabularyEntry,
        direction: Direction,
    ) -> Result<Vec<String>, QuizError> {
        let correct = answer_for(target, direction);

        let mut candidates: Vec<&str> = pool
            .iter()
            .filter(|e| e.id != target.id)
            .map(|e| answer_for(e, direction))
            .filter(|value| !value.is_empty() && *value != correct)
            .collect();
        candidates.sort_unstable();
        candidates.dedup();

        if candidates.len() < DISTRACTOR_COUNT {
            return Err(QuizError::InsufficientDistractors {
                term: correct.to_string(),
            });
        }

        candidates.shuffle(&mut self.rng);
        candidates.truncate(DISTRACTOR_COUNT);
        Ok(candidates.into_iter().map(str::to_string).collect())
    }
}

/// The answer value an entry contributes under a given direction.
fn answer_for(entry: &VocabularyEntry, direction: Direction) -> &str {
    match direction {
        Direction::SoToEn => &entry.word_en,
        Direction::EnToSo | Direction::Audio => &entry.word_so,
    }
}

/// The question text shown for an entry under a given direction.
fn prompt_for(entry: &VocabularyEntry, direction: Direction) -> String {
    match direction {
        Direction::SoToEn => {
            format!("What is the English translation of \"{}\"?", entry.word_so)
        }
        Direction::EnToSo => {
            format!("What is the Somali translation of \"{}\"?", entry.word_en)
        }
        Direction::Audio => "Listen to the pronunciation and select the correct word:".to_string(),
    }
}

/// Build the adaptive candidate pool: missed or harder entries first, then
/// the remainder in original order up to `quota`.
pub(crate) fn assemble_adaptive_pool(
    entries: &[VocabularyEntry],
    previous_results: &[QuizResult],
    quota: usize,
) -> Vec<VocabularyEntry> {
    let missed: HashSet<&str> = previous_results
        .iter()
        .filter(|r| !r.is_correct)
        .map(|r| r.entry_id.as_str())
        .collect();

    let is_priority = |entry: &VocabularyEntry| {
        missed.contains(entry.id.as_str())
            || entry.difficulty.is_none()
            || entry.difficulty == Some(Difficulty::Advanced)
    };

    let mut pool: Vec<VocabularyEntry> =
        entries.iter().filter(|e| is_priority(e)).cloned().collect();

    for entry in entries {
        if pool.len() >= quota {
            break;
        }
        if !is_priority(entry) {
            pool.push(entry.clone());
        }
    }

    pool.truncate(quota);
    pool
}
