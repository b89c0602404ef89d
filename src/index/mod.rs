//! The inverted index, forward index, and the invariants tying them
//! together.
//!
//! Both indexes are built from the *same* per-document term-frequency
//! data; the forward index exists purely so duplicate detection and
//! *sequential* document removal are `O(document size)` rather than
//! `O(vocabulary size)` (spec.md §3's "Forward index" note). Keeping
//! them in a single [`Index`] means every mutation updates both sides
//! together, so the bidirectional-membership invariant can never be
//! observed half-applied.

pub mod forward;
pub mod inverted;

use std::collections::BTreeMap;

use crate::core::types::DocumentId;
use forward::ForwardIndex;
use inverted::InvertedIndex;

/// The combined inverted + forward index for a live document set.
#[derive(Debug, Default)]
pub struct Index {
    inverted: InvertedIndex,
    forward: ForwardIndex,
}

impl Index {
    pub fn new() -> Self {
        Index::default()
    }

    /// Indexes `terms` (already stop-word-filtered) against `doc_id`.
    /// Repeated terms accumulate: each occurrence contributes
    /// `1 / terms.len()` to that term's frequency for this document.
    /// `terms` must be non-empty — callers reject empty documents
    /// before reaching here.
    pub fn index_document(&mut self, doc_id: DocumentId, terms: &[&str]) {
        debug_assert!(!terms.is_empty());
        let inv = 1.0 / terms.len() as f64;

        let mut counts: BTreeMap<&str, f64> = BTreeMap::new();
        for &term in terms {
            *counts.entry(term).or_insert(0.0) += inv;
        }

        for (term, tf) in counts {
            self.inverted.add_posting(term, doc_id, tf);
            self.forward.add_term(doc_id, term, tf);
        }
    }

    /// Removes `doc_id` from both indexes, purging any posting list that
    /// becomes empty. No-op if the id was never indexed. Walks only
    /// `doc_id`'s own terms — `O(document size)`.
    pub fn remove_document(&mut self, doc_id: DocumentId) {
        if let Some(terms) = self.forward.remove_document(doc_id) {
            for term in terms.into_keys() {
                self.inverted.remove_posting(&term, doc_id);
            }
        }
    }

    /// Same contract as [`Index::remove_document`], but the
    /// inverted-index side is cleared by scanning every posting list in
    /// parallel (mirrors the reference's `for_each` over the full
    /// term→postings map), rather than walking just this document's
    /// terms.
    pub fn remove_document_parallel(&mut self, doc_id: DocumentId) {
        self.forward.remove_document(doc_id);
        self.inverted.remove_document_parallel(doc_id);
    }

    pub fn inverted(&self) -> &InvertedIndex {
        &self.inverted
    }

    pub fn forward(&self) -> &ForwardIndex {
        &self.forward
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_then_remove_restores_empty_state() {
        let mut index = Index::new();
        index.index_document(1, &["cat", "dog", "cat"]);
        assert!(index.inverted().postings_for("cat").is_some());
        assert_eq!(index.forward().word_frequencies(1).unwrap().len(), 2);

        index.remove_document(1);
        assert!(index.inverted().postings_for("cat").is_none());
        assert!(index.forward().word_frequencies(1).is_none());
    }

    #[test]
    fn tf_sums_to_one_per_document() {
        let mut index = Index::new();
        index.index_document(1, &["a", "b", "a", "c"]);
        let sum: f64 = index.forward().word_frequencies(1).unwrap().values().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn parallel_removal_matches_sequential() {
        let mut a = Index::new();
        let mut b = Index::new();
        for idx in 0..20i64 {
            let terms: Vec<&str> = vec!["alpha", "beta", "gamma"];
            a.index_document(idx, &terms);
            b.index_document(idx, &terms);
        }
        a.remove_document(5);
        b.remove_document_parallel(5);
        assert_eq!(
            a.inverted().postings_for("alpha").unwrap().len(),
            b.inverted().postings_for("alpha").unwrap().len()
        );
        assert!(a.forward().word_frequencies(5).is_none());
        assert!(b.forward().word_frequencies(5).is_none());
    }
}
