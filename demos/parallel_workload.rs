/// Runs a batch of queries against a sized-up corpus through a
/// dedicated thread pool, comparing the bulk parallel processor against
/// running the same queries one at a time.
use std::time::Instant;

use lexidex::core::types::DocumentStatus;
use lexidex::search::processor::process_queries;
use lexidex::SearchEngine;

fn build_corpus(doc_count: usize) -> Result<SearchEngine, Box<dyn std::error::Error>> {
    let mut engine = SearchEngine::with_stop_words_text("and in the on with")?;
    let vocabulary = [
        "cat", "dog", "fur", "cared", "collar", "fashionable", "fluffy", "tail", "groomed",
        "expressive", "eyes", "bird", "fish", "nasty", "rat",
    ];
    for id in 0..doc_count as i64 {
        let text = (0..15)
            .map(|i| vocabulary[(id as usize + i) % vocabulary.len()])
            .collect::<Vec<_>>()
            .join(" ");
        engine.add_document(id, &text, DocumentStatus::Actual, &[(id % 10) + 1])?;
    }
    Ok(engine)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let worker_count = num_cpus::get();
    println!("Sizing thread pool to {worker_count} workers...");
    rayon::ThreadPoolBuilder::new()
        .num_threads(worker_count)
        .build_global()
        .ok();

    println!("Indexing corpus...");
    let engine = build_corpus(20_000)?;
    println!("  {} documents indexed\n", engine.document_count());

    let queries: Vec<String> = (0..500).map(|i| format!("cat dog fur {i}")).collect();

    let started = Instant::now();
    let sequential: Vec<_> = queries
        .iter()
        .map(|q| engine.find_top_documents_default(q))
        .collect::<Result<Vec<_>, _>>()?;
    let sequential_elapsed = started.elapsed();

    let started = Instant::now();
    let parallel = process_queries(&engine, &queries)?;
    let parallel_elapsed = started.elapsed();

    println!("sequential: {} queries in {:?}", sequential.len(), sequential_elapsed);
    println!("parallel:   {} queries in {:?}", parallel.len(), parallel_elapsed);
    assert_eq!(sequential, parallel, "sequential and parallel paths must agree");
    println!("\nresults match.");

    Ok(())
}
