//! The result of scoring one document against a query, and the
//! tie-break ordering used to rank a batch of them.

use std::cmp::Ordering;

use rayon::slice::ParallelSliceMut;

use crate::core::types::{DocumentId, RELEVANCE_EPSILON};

/// One document's score against a single query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredDocument {
    pub id: DocumentId,
    pub relevance: f64,
    pub rating: i64,
}

/// Ranks `a` ahead of `b` when: `a`'s relevance exceeds `b`'s by more
/// than [`RELEVANCE_EPSILON`]; otherwise when relevance is a tie within
/// epsilon and `a`'s rating is higher; otherwise by ascending id, so the
/// order is fully deterministic even among documents identical in both
/// relevance and rating.
pub fn cmp_ranked(a: &ScoredDocument, b: &ScoredDocument) -> Ordering {
    let relevance_diff = a.relevance - b.relevance;
    if relevance_diff.abs() > RELEVANCE_EPSILON {
        return b
            .relevance
            .partial_cmp(&a.relevance)
            .unwrap_or(Ordering::Equal);
    }
    match b.rating.cmp(&a.rating) {
        Ordering::Equal => a.id.cmp(&b.id),
        other => other,
    }
}

/// Sorts `docs` in ranking order and truncates to `limit`.
pub fn rank_and_truncate(mut docs: Vec<ScoredDocument>, limit: usize) -> Vec<ScoredDocument> {
    docs.sort_by(cmp_ranked);
    docs.truncate(limit);
    docs
}

/// Same contract as [`rank_and_truncate`], sorting with `rayon`'s
/// parallel sort. `cmp_ranked` is a total order (ties broken down to
/// ascending id), so the result is identical to the sequential sort.
pub fn rank_and_truncate_parallel(mut docs: Vec<ScoredDocument>, limit: usize) -> Vec<ScoredDocument> {
    docs.par_sort_by(cmp_ranked);
    docs.truncate(limit);
    docs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: DocumentId, relevance: f64, rating: i64) -> ScoredDocument {
        ScoredDocument { id, relevance, rating }
    }

    #[test]
    fn higher_relevance_wins() {
        let mut docs = vec![doc(1, 0.1, 5), doc(2, 0.9, 1)];
        docs.sort_by(cmp_ranked);
        assert_eq!(docs[0].id, 2);
    }

    #[test]
    fn within_epsilon_falls_back_to_rating() {
        let mut docs = vec![doc(1, 0.5, 1), doc(2, 0.5 + RELEVANCE_EPSILON / 2.0, 9)];
        docs.sort_by(cmp_ranked);
        assert_eq!(docs[0].id, 2);
    }

    #[test]
    fn full_tie_falls_back_to_ascending_id() {
        let mut docs = vec![doc(3, 0.5, 2), doc(1, 0.5, 2), doc(2, 0.5, 2)];
        docs.sort_by(cmp_ranked);
        assert_eq!(docs.iter().map(|d| d.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn truncate_keeps_only_the_top_results() {
        let docs = vec![doc(1, 0.1, 0), doc(2, 0.9, 0), doc(3, 0.5, 0)];
        let top = rank_and_truncate(docs, 2);
        assert_eq!(top.iter().map(|d| d.id).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn parallel_rank_matches_sequential_rank() {
        let docs = vec![
            doc(1, 0.5, 2),
            doc(2, 0.5, 2),
            doc(3, 0.9, 0),
            doc(4, 0.1, 9),
            doc(5, 0.5 + RELEVANCE_EPSILON / 2.0, 9),
        ];
        let sequential = rank_and_truncate(docs.clone(), 3);
        let parallel = rank_and_truncate_parallel(docs, 3);
        assert_eq!(sequential, parallel);
    }
}
