use criterion::{black_box, criterion_group, criterion_main, Criterion};

use eray_core::analysis::{calculate_streak, PerformanceAnalyzer};
use eray_core::model::{Difficulty, PartOfSpeech, VocabularyEntry};
use eray_core::scoring::{calculate_score, Grade};
use eray_core::session::QuizResult;

fn make_results(count: usize) -> Vec<QuizResult> {
    (0..count)
        .map(|i| QuizResult {
            question_id: format!("q_{i}"),
            entry_id: format!("w{}", i % 50),
            submitted_answer: "answer".into(),
            correct_answer: if i % 3 == 0 { "other" } else { "answer" }.into(),
            is_correct: i % 3 != 0,
            time_spent_ms: 1_000 + (i as u64 % 20) * 1_000,
        })
        .collect()
}

fn make_entries(count: usize) -> Vec<VocabularyEntry> {
    let tags = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
    ];
    (0..count)
        .map(|i| VocabularyEntry {
            id: format!("w{i}"),
            category_id: "bench".into(),
            word_so: format!("eray-{i}"),
            word_en: format!("word-{i}"),
            part_of_speech: Some(tags[i % tags.len()]),
            difficulty: Some(Difficulty::Beginner),
            examples: Vec::new(),
        })
        .collect()
}

fn bench_calculate_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_score");

    for size in [10, 100, 1000] {
        let results = make_results(size);
        group.bench_function(format!("n={size}"), |b| {
            b.iter(|| calculate_score(black_box(&results)))
        });
    }

    group.finish();
}

fn bench_grade_lookup(c: &mut Criterion) {
    c.bench_function("grade_from_score", |b| {
        b.iter(|| {
            for score in 0..=100u8 {
                black_box(Grade::from_score(black_box(score)));
            }
        })
    });
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let analyzer = PerformanceAnalyzer::new();
    let entries = make_entries(50);

    for size in [10, 100, 1000] {
        let results = make_results(size);
        group.bench_function(format!("n={size}"), |b| {
            b.iter(|| analyzer.analyze(black_box(&results), black_box(&entries)))
        });
    }

    group.finish();
}

fn bench_streaks(c: &mut Criterion) {
    let results = make_results(1000);
    c.bench_function("calculate_streak_n=1000", |b| {
        b.iter(|| calculate_streak(black_box(&results)))
    });
}

criterion_group!(
    benches,
    bench_calculate_score,
    bench_grade_lookup,
    bench_analyze,
    bench_streaks
);
criterion_main!(benches);
