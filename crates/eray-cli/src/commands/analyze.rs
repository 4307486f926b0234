//! The `eray analyze` command: re-analyze a saved session.

use std::path::PathBuf;

use anyhow::Result;

use eray_core::analysis::{calculate_streak, PerformanceAnalyzer};
use eray_core::parser;
use eray_core::session::QuizSession;

pub fn execute(session_path: PathBuf, words_path: PathBuf) -> Result<()> {
    let session = QuizSession::load_json(&session_path)?;
    let set = parser::parse_vocabulary_set(&words_path)?;

    println!(
        "Session {} - category \"{}\", {} of {} questions answered",
        session.id,
        session.category_id,
        session.results.len(),
        session.questions.len()
    );

    let analyzer = PerformanceAnalyzer::new();
    let performance = analyzer.analyze(&session.results, &set.words);
    super::print_performance(&performance);
    super::print_streak(&calculate_streak(&session.results));

    let recommendations = analyzer.study_recommendations(&session.results, &set.words);
    if !recommendations.is_empty() {
        println!("\nRecommendations:");
        for recommendation in &recommendations {
            println!("  - {recommendation}");
        }
    }

    Ok(())
}
