//! TF-IDF relevance: `idf(term) = ln(total_docs / docs_containing(term))`,
//! `relevance(doc) = sum over plus-terms of tf(term, doc) * idf(term)`.
//!
//! `tf` itself lives in the index rows ([`crate::index::inverted`] /
//! [`crate::index::forward`]) since it is a property of the document,
//! not of a query; this module only ever computes `idf`, which is a
//! property of the corpus at query time.

/// `ln(total_docs / doc_freq)`. Callers only invoke this for terms with
/// `doc_freq > 0` (terms absent from the index contribute nothing to
/// relevance and are skipped before reaching here), and `total_docs` is
/// the engine's non-zero document count at query time.
pub fn inverse_document_frequency(total_docs: usize, doc_freq: usize) -> f64 {
    (total_docs as f64 / doc_freq as f64).ln()
}
