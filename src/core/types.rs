//! Document identity, status, and the numeric constants the rest of the
//! crate is built around.

/// A document identifier. Must be non-negative and unique across live
/// documents; enforced by [`crate::search::engine::SearchEngine::add_document`].
pub type DocumentId = i64;

/// The lifecycle state a document was tagged with at insert time.
/// Documents are immutable once added — changing status means
/// remove-then-re-add.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentStatus {
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

/// A stored document: its average rating, status, and the original text
/// it was indexed from. Never mutated after [`crate::search::engine::SearchEngine::add_document`]
/// returns.
#[derive(Debug, Clone)]
pub struct DocumentRecord {
    pub average_rating: i64,
    pub status: DocumentStatus,
    pub original_text: String,
}

/// Truncate ranked results to at most this many hits.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Width of the [`crate::search::window::RequestWindow`] sliding window.
pub const REQUEST_WINDOW_SIZE: usize = 1440;

/// Two relevances within this distance of each other are considered
/// tied and broken by rating, then by ascending id.
pub const RELEVANCE_EPSILON: f64 = 1e-6;

/// Default bucket count for the sharded concurrent accumulator used
/// during parallel scoring — a small prime comfortably larger than a
/// typical hardware thread count.
pub const ACCUMULATOR_SHARD_COUNT: usize = 97;

/// Arithmetic mean of `ratings`, truncated toward zero. Empty input
/// averages to 0.
pub fn average_rating(ratings: &[i64]) -> i64 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().sum();
    sum / ratings.len() as i64
}
