//! Percentage scoring and letter grades.
//!
//! Scores round half-up to the nearest integer percentage (`f64::round`
//! rounds halves away from zero, which is half-up for the non-negative
//! values here): 2 of 3 correct scores 67, 1 of 3 scores 33. Grades come
//! from a fixed top-down threshold table; the first threshold the score
//! meets wins.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::session::QuizResult;

/// Reduce a result list to an integer percentage score.
///
/// An empty list scores 0; "nothing answered yet" is a valid state, not an
/// error.
pub fn calculate_score(results: &[QuizResult]) -> u8 {
    if results.is_empty() {
        return 0;
    }
    let correct = results.iter().filter(|r| r.is_correct).count();
    (correct as f64 / results.len() as f64 * 100.0).round() as u8
}

/// Letter grade, ordered best to worst.
///
/// The derived `Ord` follows declaration order, so `Grade::APlus` compares
/// smallest. "Never worse" in grade terms means `<=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "F")]
    F,
}

/// Minimum score for each grade, evaluated top-down.
const GRADE_THRESHOLDS: [(u8, Grade); 11] = [
    (95, Grade::APlus),
    (90, Grade::A),
    (85, Grade::AMinus),
    (80, Grade::BPlus),
    (75, Grade::B),
    (70, Grade::BMinus),
    (65, Grade::CPlus),
    (60, Grade::C),
    (55, Grade::CMinus),
    (50, Grade::D),
    (0, Grade::F),
];

impl Grade {
    /// Map a percentage score to its letter grade.
    pub fn from_score(score: u8) -> Grade {
        for (threshold, grade) in GRADE_THRESHOLDS {
            if score >= threshold {
                return grade;
            }
        }
        Grade::F
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::CMinus => "C-",
            Grade::D => "D",
            Grade::F => "F",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_result(is_correct: bool) -> QuizResult {
        QuizResult {
            question_id: "q_1".into(),
            entry_id: "w1".into(),
            submitted_answer: if is_correct { "lion" } else { "goat" }.into(),
            correct_answer: "lion".into(),
            is_correct,
            time_spent_ms: 1_000,
        }
    }

    #[test]
    fn empty_results_score_zero() {
        assert_eq!(calculate_score(&[]), 0);
    }

    #[test]
    fn two_of_three_rounds_up_to_67() {
        let results = vec![make_result(true), make_result(true), make_result(false)];
        assert_eq!(calculate_score(&results), 67);
    }

    #[test]
    fn one_of_three_rounds_down_to_33() {
        let results = vec![make_result(false), make_result(false), make_result(true)];
        assert_eq!(calculate_score(&results), 33);
    }

    #[test]
    fn all_correct_is_100() {
        let results = vec![make_result(true); 5];
        assert_eq!(calculate_score(&results), 100);
    }

    #[test]
    fn half_rounds_up() {
        // 1 of 8 = 12.5%, half-up gives 13
        let mut results = vec![make_result(false); 7];
        results.push(make_result(true));
        assert_eq!(calculate_score(&results), 13);
    }

    #[test]
    fn grade_boundaries() {
        assert_eq!(Grade::from_score(100), Grade::APlus);
        assert_eq!(Grade::from_score(95), Grade::APlus);
        assert_eq!(Grade::from_score(94), Grade::A);
        assert_eq!(Grade::from_score(85), Grade::AMinus);
        assert_eq!(Grade::from_score(80), Grade::BPlus);
        assert_eq!(Grade::from_score(67), Grade::CPlus);
        assert_eq!(Grade::from_score(50), Grade::D);
        assert_eq!(Grade::from_score(49), Grade::F);
        assert_eq!(Grade::from_score(0), Grade::F);
    }

    #[test]
    fn grade_is_monotonic_in_score() {
        for score in 1..=100u8 {
            assert!(
                Grade::from_score(score) <= Grade::from_score(score - 1),
                "grade worsened as score rose at {score}"
            );
        }
    }

    #[test]
    fn grade_display_and_serde() {
        assert_eq!(Grade::APlus.to_string(), "A+");
        assert_eq!(serde_json::to_string(&Grade::AMinus).unwrap(), "\"A-\"");
        let back: Grade = serde_json::from_str("\"B+\"").unwrap();
        assert_eq!(back, Grade::BPlus);
    }
}
