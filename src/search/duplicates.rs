//! Removes duplicate documents: two documents are duplicates when they
//! share the exact same *set* of terms, ignoring term frequency and
//! original wording. Mirrors
//! `original_source/remove_duplicates.cpp`'s first-occurrence-wins scan
//! in insertion order.

use std::collections::BTreeSet;

use crate::core::types::DocumentId;
use crate::search::engine::SearchEngine;

/// Scans `engine`'s documents in insertion order, removes every
/// document whose term set duplicates one already seen, prints
/// `Found duplicate document id {id}` for each removal (the documented
/// stdout contract), and returns the removed ids in the order they were
/// removed.
pub fn remove_duplicates(engine: &mut SearchEngine) -> Vec<DocumentId> {
    let mut seen_term_sets: BTreeSet<BTreeSet<String>> = BTreeSet::new();
    let mut duplicates = Vec::new();

    for doc_id in engine.document_ids().collect::<Vec<_>>() {
        let term_set: BTreeSet<String> = engine
            .word_frequencies(doc_id)
            .keys()
            .cloned()
            .collect();
        if seen_term_sets.contains(&term_set) {
            duplicates.push(doc_id);
        } else {
            seen_term_sets.insert(term_set);
        }
    }

    for &doc_id in &duplicates {
        println!("Found duplicate document id {doc_id}");
        engine.remove_document(doc_id);
    }

    duplicates
}
