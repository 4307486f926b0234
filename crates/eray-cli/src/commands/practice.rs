//! The `eray practice` command: an interactive terminal quiz.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use eray_core::analysis::{calculate_streak, PerformanceAnalyzer};
use eray_core::engine::QuizEngine;
use eray_core::model::QuizMode;
use eray_core::parser::{self, VocabularySet};
use eray_core::session::{QuizQuestion, QuizResult, QuizSession};

pub fn execute(
    words_path: PathBuf,
    count: usize,
    mode: String,
    adaptive: bool,
    history: Option<PathBuf>,
    seed: Option<u64>,
    output: Option<PathBuf>,
) -> Result<()> {
    let set = parser::parse_vocabulary_set(&words_path)?;
    for warning in parser::validate_vocabulary_set(&set) {
        tracing::warn!(word = ?warning.word_id, "{}", warning.message);
    }

    let mode: QuizMode = mode
        .parse()
        .map_err(|e: String| anyhow::anyhow!("{e}"))?;

    let previous = history
        .map(|path| QuizSession::load_json(&path).map(|s| s.results))
        .transpose()?
        .unwrap_or_default();

    let questions = match seed {
        Some(seed) => {
            let mut engine = QuizEngine::with_rng(StdRng::seed_from_u64(seed));
            generate(&mut engine, &set, &previous, count, mode, adaptive)?
        }
        None => {
            let mut engine = QuizEngine::new();
            generate(&mut engine, &set, &previous, count, mode, adaptive)?
        }
    };

    println!(
        "Quiz: {} - {} ({} questions, {mode} mode)",
        set.category.name_so,
        set.category.name_en,
        questions.len()
    );

    let total = questions.len();
    let mut session = QuizSession::new(set.category.id.clone(), questions);

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    while let Some(question) = session.current_question().cloned() {
        let number = session.results.len() + 1;
        println!("\nQuestion {number}/{total}: {}", question.question);
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}. {option}", i + 1);
        }
        print!("> ");
        std::io::stdout().flush()?;

        let started = Instant::now();
        let Some(line) = lines.next() else {
            // stdin closed mid-quiz; score what was answered so far
            println!();
            break;
        };
        let line = line.context("failed to read answer")?;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        let answer = resolve_answer(line.trim(), &question);
        let result = session.record_answer(&answer, elapsed_ms)?;
        if result.is_correct {
            println!("Correct!");
        } else {
            println!("Incorrect - the answer is \"{}\"", question.correct_answer);
        }
    }

    let analyzer = PerformanceAnalyzer::new();
    let performance = analyzer.analyze(&session.results, &set.words);

    println!();
    super::print_performance(&performance);
    super::print_streak(&calculate_streak(&session.results));

    let recommendations = analyzer.study_recommendations(&session.results, &set.words);
    if !recommendations.is_empty() {
        println!("\nRecommendations:");
        for recommendation in &recommendations {
            println!("  - {recommendation}");
        }
    }

    if let Some(dir) = output {
        let path = dir.join(format!("session-{}.json", session.id));
        session.save_json(&path)?;
        println!("\nSession saved to: {}", path.display());
    }

    Ok(())
}

fn generate<R: Rng>(
    engine: &mut QuizEngine<R>,
    set: &VocabularySet,
    previous: &[QuizResult],
    count: usize,
    mode: QuizMode,
    adaptive: bool,
) -> Result<Vec<QuizQuestion>> {
    let questions = if adaptive {
        engine.generate_adaptive_questions(&set.words, previous, count)?
    } else {
        engine.generate_questions(&set.words, count, mode)?
    };
    Ok(questions)
}

/// Interpret a line of input as an option number when possible, otherwise
/// as a typed-out answer.
fn resolve_answer(input: &str, question: &QuizQuestion) -> String {
    match input.parse::<usize>() {
        Ok(n) if (1..=question.options.len()).contains(&n) => question.options[n - 1].clone(),
        _ => input.to_string(),
    }
}
