use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use eray_core::engine::QuizEngine;
use eray_core::model::{Difficulty, QuizMode, VocabularyEntry};

fn make_entries(count: usize) -> Vec<VocabularyEntry> {
    (0..count)
        .map(|i| VocabularyEntry {
            id: format!("w{i}"),
            category_id: "bench".into(),
            word_so: format!("eray-{i}"),
            word_en: format!("word-{i}"),
            part_of_speech: None,
            difficulty: Some(Difficulty::Beginner),
            examples: Vec::new(),
        })
        .collect()
}

fn bench_generate_questions(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_questions");

    for (pool, count) in [(10, 10), (100, 10), (1000, 20)] {
        let entries = make_entries(pool);
        group.bench_function(format!("pool={pool},count={count}"), |b| {
            let mut engine = QuizEngine::with_rng(StdRng::seed_from_u64(42));
            b.iter(|| {
                engine
                    .generate_questions(black_box(&entries), black_box(count), QuizMode::Mixed)
                    .unwrap()
            })
        });
    }

    group.finish();
}

fn bench_adaptive_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_adaptive_questions");

    let entries = make_entries(200);
    let previous: Vec<_> = {
        let mut engine = QuizEngine::with_rng(StdRng::seed_from_u64(7));
        let questions = engine
            .generate_questions(&entries, 50, QuizMode::Mixed)
            .unwrap();
        questions
            .iter()
            .map(|q| eray_core::session::QuizResult {
                question_id: q.id.clone(),
                entry_id: q.entry_id.clone(),
                submitted_answer: String::new(),
                correct_answer: q.correct_answer.clone(),
                is_correct: false,
                time_spent_ms: 5_000,
            })
            .collect()
    };

    group.bench_function("pool=200,missed=50,count=20", |b| {
        let mut engine = QuizEngine::with_rng(StdRng::seed_from_u64(42));
        b.iter(|| {
            engine
                .generate_adaptive_questions(black_box(&entries), black_box(&previous), 20)
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_generate_questions, bench_adaptive_generation);
criterion_main!(benches);
