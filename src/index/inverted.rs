//! `term → (document_id → term_frequency)`, ordered both ways so
//! iteration is deterministic without an extra sort step.

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::core::types::DocumentId;

/// Posting list for one term: the documents that contain it, mapped to
/// their term frequency.
pub type PostingList = BTreeMap<DocumentId, f64>;

#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: BTreeMap<String, PostingList>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex::default()
    }

    /// Adds (or accumulates into) the posting for `term` in `doc_id`.
    pub fn add_posting(&mut self, term: &str, doc_id: DocumentId, tf: f64) {
        *self
            .postings
            .entry(term.to_string())
            .or_default()
            .entry(doc_id)
            .or_insert(0.0) += tf;
    }

    /// Removes `doc_id` from `term`'s posting list, purging the row if
    /// it becomes empty. No-op if `term` or `doc_id` is absent.
    pub fn remove_posting(&mut self, term: &str, doc_id: DocumentId) {
        if let Some(postings) = self.postings.get_mut(term) {
            postings.remove(&doc_id);
            if postings.is_empty() {
                self.postings.remove(term);
            }
        }
    }

    /// Removes `doc_id` from every posting list, in parallel, then
    /// purges rows left empty. Used by the parallel `RemoveDocument`
    /// path, which scans the whole vocabulary rather than just the
    /// removed document's own terms.
    pub fn remove_document_parallel(&mut self, doc_id: DocumentId) {
        self.postings
            .par_iter_mut()
            .for_each(|(_, postings)| {
                postings.remove(&doc_id);
            });
        self.postings.retain(|_, postings| !postings.is_empty());
    }

    pub fn postings_for(&self, term: &str) -> Option<&PostingList> {
        self.postings.get(term)
    }

    /// Number of documents containing `term` (its document frequency).
    pub fn document_frequency(&self, term: &str) -> usize {
        self.postings.get(term).map_or(0, PostingList::len)
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    /// An iterator over every indexed term, in sorted order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
