//! Document-filtering predicates for `find_top_documents`: the three
//! call shapes from `original_source/search_server.h`
//! (`DocumentPredicate`, `DocumentStatus` overload, and the
//! status-defaults-to-`ACTUAL` overload) all desugar to a single
//! `Fn(DocumentId, DocumentStatus, i64) -> bool`.

use crate::core::types::{DocumentId, DocumentStatus};

/// A predicate deciding whether a document is eligible to appear in a
/// result set, given its id, status and average rating.
pub trait DocumentSelector: Fn(DocumentId, DocumentStatus, i64) -> bool + Sync {}

impl<F> DocumentSelector for F where F: Fn(DocumentId, DocumentStatus, i64) -> bool + Sync {}

/// Matches only documents with the given status.
pub fn status_selector(status: DocumentStatus) -> impl Fn(DocumentId, DocumentStatus, i64) -> bool + Sync {
    move |_id, doc_status, _rating| doc_status == status
}

/// The default selector used when the caller supplies neither a status
/// nor a predicate: only `Actual` documents.
pub fn actual_selector() -> impl Fn(DocumentId, DocumentStatus, i64) -> bool + Sync {
    status_selector(DocumentStatus::Actual)
}
