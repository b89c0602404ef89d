use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lexidex::core::types::DocumentStatus;
use lexidex::SearchEngine;
use rand::Rng;

fn random_document_text(word_count: usize) -> String {
    let mut rng = rand::thread_rng();
    let vocabulary = [
        "cat", "dog", "fur", "cared", "collar", "fashionable", "fluffy", "tail", "groomed",
        "expressive", "eyes", "bird", "fish", "nasty", "rat",
    ];
    (0..word_count)
        .map(|_| vocabulary[rng.gen_range(0..vocabulary.len())])
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_add_document(c: &mut Criterion) {
    c.bench_function("add_document", |b| {
        let mut engine = SearchEngine::with_stop_words_text("a an the").unwrap();
        let mut id = 0i64;
        b.iter(|| {
            let text = random_document_text(20);
            engine
                .add_document(id, black_box(&text), DocumentStatus::Actual, &[5])
                .unwrap();
            id += 1;
        });
    });
}

fn bench_add_document_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_document_scaling");
    for corpus_size in [100usize, 1_000, 5_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(corpus_size),
            &corpus_size,
            |b, &corpus_size| {
                b.iter(|| {
                    let mut engine = SearchEngine::with_stop_words_text("a an the").unwrap();
                    for id in 0..corpus_size as i64 {
                        let text = random_document_text(20);
                        engine
                            .add_document(id, black_box(&text), DocumentStatus::Actual, &[5])
                            .unwrap();
                    }
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_add_document, bench_add_document_scaling);
criterion_main!(benches);
