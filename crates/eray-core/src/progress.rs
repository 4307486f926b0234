//! Longitudinal progress calculations.
//!
//! Pure helpers over past session data: the level/XP curve, average scores,
//! study-day streaks, and the next-difficulty recommendation. None of these
//! read the clock; callers pass "today" in explicitly so the calculations
//! stay reproducible.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analysis::QuizPerformance;
use crate::model::QuizDifficulty;

/// Experience points per level.
pub const XP_PER_LEVEL: u32 = 100;

/// Level reached for a given XP total. Levels start at 1.
pub fn calculate_level(experience_points: u32) -> u32 {
    experience_points / XP_PER_LEVEL + 1
}

/// Total XP required to reach the next level.
pub fn xp_for_next_level(level: u32) -> u32 {
    level * XP_PER_LEVEL
}

/// Percent progress through the current level, clamped to 0–100.
pub fn level_progress_percent(experience_points: u32, level: u32) -> f64 {
    let current_level_xp = (level.saturating_sub(1)) * XP_PER_LEVEL;
    let next_level_xp = level * XP_PER_LEVEL;
    let total_for_level = (next_level_xp - current_level_xp) as f64;
    let progress_in_level = experience_points.saturating_sub(current_level_xp) as f64;

    (progress_in_level / total_for_level * 100.0).clamp(0.0, 100.0)
}

/// Average of past session scores, rounded half-up. Empty input averages 0.
pub fn average_score(scores: &[u8]) -> u8 {
    if scores.is_empty() {
        return 0;
    }
    let sum: u32 = scores.iter().map(|&s| s as u32).sum();
    (sum as f64 / scores.len() as f64).round() as u8
}

/// Consecutive study days derived from activity dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyStreak {
    /// Days in the streak ending today or yesterday; 0 if the learner has
    /// not studied since then.
    pub current: u32,
    /// Longest run of consecutive study days on record.
    pub longest: u32,
}

/// Compute study-day streaks from a set of activity dates.
///
/// Dates are deduplicated (several sessions on one day count once). The
/// current streak only counts when the most recent activity was `today` or
/// the day before; an older streak is still reported in `longest`.
pub fn study_streak(activity_dates: &[NaiveDate], today: NaiveDate) -> StudyStreak {
    if activity_dates.is_empty() {
        return StudyStreak {
            current: 0,
            longest: 0,
        };
    }

    let mut dates = activity_dates.to_vec();
    dates.sort_unstable_by(|a, b| b.cmp(a));
    dates.dedup();

    let yesterday = today - chrono::Duration::days(1);
    let mut current = 0;
    if dates[0] == today || dates[0] == yesterday {
        current = 1;
        for pair in dates.windows(2) {
            if (pair[0] - pair[1]).num_days() == 1 {
                current += 1;
            } else {
                break;
            }
        }
    }

    let mut longest = 0u32;
    let mut run = 1u32;
    for pair in dates.windows(2) {
        if (pair[0] - pair[1]).num_days() == 1 {
            run += 1;
        } else {
            longest = longest.max(run);
            run = 1;
        }
    }
    longest = longest.max(run).max(current);

    StudyStreak { current, longest }
}

/// Recommend the next session difficulty from recent performances.
///
/// Consistently accurate and fast answering earns a harder setting: average
/// accuracy ≥ 90 with average answer time ≤ 8 s recommends hard, ≥ 75 with
/// ≤ 12 s recommends medium, anything else (including no history) easy.
pub fn recommend_difficulty(recent: &[QuizPerformance]) -> QuizDifficulty {
    if recent.is_empty() {
        return QuizDifficulty::Easy;
    }

    let n = recent.len() as f64;
    let avg_accuracy = recent.iter().map(|p| p.accuracy as f64).sum::<f64>() / n;
    let avg_time = recent
        .iter()
        .map(|p| p.average_time_secs as f64)
        .sum::<f64>()
        / n;

    if avg_accuracy >= 90.0 && avg_time <= 8.0 {
        QuizDifficulty::Hard
    } else if avg_accuracy >= 75.0 && avg_time <= 12.0 {
        QuizDifficulty::Medium
    } else {
        QuizDifficulty::Easy
    }
}
