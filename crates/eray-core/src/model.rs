//! Core data model for the vocabulary trainer.
//!
//! These are the types the rest of the engine operates on: word entries with
//! their grammatical metadata, question directions, and quiz configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// A vocabulary category (e.g. animals, food, greetings).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier for this category.
    pub id: String,
    /// Somali category name.
    pub name_so: String,
    /// English category name.
    pub name_en: String,
}

/// One learnable Somali–English word pair.
///
/// The engine treats entries as immutable input. Both terms must be
/// non-empty; `parser::validate_vocabulary_set` flags entries that violate
/// this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// Unique identifier for this entry.
    pub id: String,
    /// Category this entry belongs to.
    #[serde(default)]
    pub category_id: String,
    /// The Somali term.
    pub word_so: String,
    /// The English term.
    pub word_en: String,
    /// Grammatical part of speech, if tagged.
    #[serde(default)]
    pub part_of_speech: Option<PartOfSpeech>,
    /// Difficulty tag, if tagged.
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    /// Example sentence pairs.
    #[serde(default)]
    pub examples: Vec<ExamplePair>,
}

/// A Somali/English example sentence pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamplePair {
    pub so: String,
    pub en: String,
}

/// The fixed set of part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Pronoun,
    Conjunction,
}

impl PartOfSpeech {
    /// Bilingual display label, Somali first.
    pub fn bilingual_label(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "Magacyada - Nouns",
            PartOfSpeech::Verb => "Ficillada - Verbs",
            PartOfSpeech::Adjective => "Tilmaanta - Adjectives",
            PartOfSpeech::Adverb => "Xaaladaha - Adverbs",
            PartOfSpeech::Preposition => "Jarrada - Prepositions",
            PartOfSpeech::Pronoun => "Badalyada - Pronouns",
            PartOfSpeech::Conjunction => "Xiriiriyaha - Conjunctions",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Conjunction => "conjunction",
        };
        write!(f, "{s}")
    }
}

impl FromStr for PartOfSpeech {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "noun" => Ok(PartOfSpeech::Noun),
            "verb" => Ok(PartOfSpeech::Verb),
            "adjective" => Ok(PartOfSpeech::Adjective),
            "adverb" => Ok(PartOfSpeech::Adverb),
            "preposition" => Ok(PartOfSpeech::Preposition),
            "pronoun" => Ok(PartOfSpeech::Pronoun),
            "conjunction" => Ok(PartOfSpeech::Conjunction),
            other => Err(format!("unknown part of speech: {other}")),
        }
    }
}

/// Difficulty tag on a vocabulary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// Which language a single question prompts in and expects back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Somali prompt, English answer.
    #[serde(rename = "so-to-en")]
    SoToEn,
    /// English prompt, Somali answer.
    #[serde(rename = "en-to-so")]
    EnToSo,
    /// Played pronunciation, Somali answer.
    #[serde(rename = "audio")]
    Audio,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::SoToEn => "so-to-en",
            Direction::EnToSo => "en-to-so",
            Direction::Audio => "audio",
        };
        write!(f, "{s}")
    }
}

/// How question directions are chosen for a whole quiz.
///
/// `Mixed` draws each question's direction independently from a weighted
/// distribution; the other modes fix one direction for every question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizMode {
    #[serde(rename = "so-to-en")]
    SoToEn,
    #[serde(rename = "en-to-so")]
    EnToSo,
    #[serde(rename = "audio")]
    Audio,
    #[serde(rename = "mixed")]
    Mixed,
}

impl QuizMode {
    /// The single direction this mode pins every question to, or `None` for
    /// `Mixed`.
    pub fn fixed_direction(&self) -> Option<Direction> {
        match self {
            QuizMode::SoToEn => Some(Direction::SoToEn),
            QuizMode::EnToSo => Some(Direction::EnToSo),
            QuizMode::Audio => Some(Direction::Audio),
            QuizMode::Mixed => None,
        }
    }
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuizMode::SoToEn => "so-to-en",
            QuizMode::EnToSo => "en-to-so",
            QuizMode::Audio => "audio",
            QuizMode::Mixed => "mixed",
        };
        write!(f, "{s}")
    }
}

impl FromStr for QuizMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "so-to-en" => Ok(QuizMode::SoToEn),
            "en-to-so" => Ok(QuizMode::EnToSo),
            "audio" => Ok(QuizMode::Audio),
            "mixed" => Ok(QuizMode::Mixed),
            other => Err(format!("unknown quiz mode: {other}")),
        }
    }
}

/// Overall session difficulty setting chosen by the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizDifficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for QuizDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuizDifficulty::Easy => "easy",
            QuizDifficulty::Medium => "medium",
            QuizDifficulty::Hard => "hard",
        };
        write!(f, "{s}")
    }
}

/// Settings for one quiz run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    /// How many questions to generate.
    pub question_count: usize,
    /// Countdown per question, in seconds.
    pub time_per_question_secs: u64,
    /// How question directions are chosen.
    pub mode: QuizMode,
    /// Session difficulty setting.
    pub difficulty: QuizDifficulty,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            question_count: 10,
            time_per_question_secs: 30,
            mode: QuizMode::Mixed,
            difficulty: QuizDifficulty::Easy,
        }
    }
}

impl QuizConfig {
    /// Check the configuration against its bounds and the available pool.
    pub fn validate(&self, available_words: usize) -> Result<(), QuizError> {
        if self.question_count < 1 {
            return Err(QuizError::InvalidConfig {
                reason: "question count must be at least 1".into(),
            });
        }
        if self.question_count > available_words {
            return Err(QuizError::InvalidConfig {
                reason: format!(
                    "question count {} exceeds the {available_words} available words",
                    self.question_count
                ),
            });
        }
        if self.time_per_question_secs < 5 || self.time_per_question_secs > 300 {
            return Err(QuizError::InvalidConfig {
                reason: "time per question must be between 5 and 300 seconds".into(),
            });
        }
        Ok(())
    }
}
