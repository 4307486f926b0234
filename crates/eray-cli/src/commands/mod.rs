//! CLI subcommand implementations.

pub mod analyze;
pub mod init;
pub mod practice;
pub mod validate;

use comfy_table::Table;
use eray_core::analysis::{QuizPerformance, Streak, StreakKind};

/// Render a finished session's performance as a table.
pub(crate) fn print_performance(performance: &QuizPerformance) {
    let mut table = Table::new();
    table.set_header(vec!["Questions", "Correct", "Accuracy", "Grade", "Total", "Avg/answer"]);
    table.add_row(vec![
        performance.total_questions.to_string(),
        performance.correct_answers.to_string(),
        format!("{}%", performance.accuracy),
        performance.grade_label(),
        format!("{:.1}s", performance.total_time_ms as f64 / 1000.0),
        format!("{}s", performance.average_time_secs),
    ]);
    println!("{table}");

    if !performance.strengths.is_empty() {
        println!("Strengths: {}", performance.strengths.join(", "));
    }
    if !performance.weaknesses.is_empty() {
        println!("Weaknesses: {}", performance.weaknesses.join(", "));
    }
}

/// One-line streak summary.
pub(crate) fn print_streak(streak: &Streak) {
    let kind = match streak.kind {
        StreakKind::Correct => "correct",
        StreakKind::Incorrect => "incorrect",
        StreakKind::None => "none",
    };
    println!(
        "Streak: current {} ({kind}), longest {}",
        streak.current, streak.longest
    );
}
