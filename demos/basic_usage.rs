/// A walkthrough of the core `SearchEngine` API: adding documents,
/// ranked search, minus-word exclusion, document removal and duplicate
/// cleanup.
///
/// `paginate` and `format_document` below are the two external-
/// collaborator interfaces spec.md §6 names (pagination over result
/// lists, formatted printing of a found document) — they live here
/// rather than in the library because the spec treats both as
/// illustrative front-end concerns, not part of the core's tested
/// public API.
use lexidex::core::types::DocumentStatus;
use lexidex::scoring::ranked::ScoredDocument;
use lexidex::search::duplicates::remove_duplicates;
use lexidex::SearchEngine;

/// Splits `items` into chunks of at most `page_size` elements each.
/// `page_size == 0` yields no pages.
fn paginate<T>(items: &[T], page_size: usize) -> Vec<&[T]> {
    if page_size == 0 {
        return Vec::new();
    }
    items.chunks(page_size).collect()
}

fn format_document(doc: &ScoredDocument) -> String {
    format!(
        "{{ document_id = {}, relevance = {:.6}, rating = {} }}",
        doc.id, doc.relevance, doc.rating
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building search engine...");
    let mut engine = SearchEngine::with_stop_words_text("and in the on with")?;

    let documents: &[(i64, &str, DocumentStatus, &[i64])] = &[
        (0, "white cat and fashionable collar", DocumentStatus::Actual, &[8, 8]),
        (1, "fluffy cat fluffy tail", DocumentStatus::Actual, &[7]),
        (2, "well groomed dog expressive eyes", DocumentStatus::Actual, &[5, 5]),
        (3, "white cat and fashionable collar", DocumentStatus::Actual, &[8, 8]),
    ];
    for &(id, text, status, ratings) in documents {
        match engine.add_document(id, text, status, ratings) {
            Ok(()) => println!("  added document {id}"),
            Err(e) => eprintln!("  failed to add document {id}: {e}"),
        }
    }
    println!();

    println!("Searching for \"fluffy groomed cat\"...");
    let found = engine.find_top_documents_default("fluffy groomed cat")?;
    for page in paginate(&found, 2) {
        for doc in page {
            println!("  {}", format_document(doc));
        }
    }
    println!();

    println!("Searching for \"cat -fluffy\" (excludes fluffy documents)...");
    for found in engine.find_top_documents_default("cat -fluffy")? {
        println!("  {}", format_document(&found));
    }
    println!();

    println!("Removing duplicate documents...");
    let removed = remove_duplicates(&mut engine);
    println!("  removed ids: {removed:?}");
    println!("  documents remaining: {:?}", engine.document_ids().collect::<Vec<_>>());

    Ok(())
}
