//! Bulk parallel querying: the equivalent of the reference
//! `ProcessQueries`/`ProcessQueriesJoined` free functions in
//! `original_source/process_queries.cpp`.

use rayon::prelude::*;

use crate::core::error::Result;
use crate::query::selector::actual_selector;
use crate::scoring::ranked::ScoredDocument;
use crate::search::engine::SearchEngine;

/// Runs every query in `queries` against `engine` in parallel (using
/// the default `Actual`-only selector) and returns one ranked result
/// list per query, in the same order as `queries`. The whole call fails
/// if any single query is malformed.
pub fn process_queries(engine: &SearchEngine, queries: &[String]) -> Result<Vec<Vec<ScoredDocument>>> {
    queries
        .par_iter()
        .map(|query| engine.find_top_documents(query, actual_selector()))
        .collect()
}

/// Like [`process_queries`], but flattens every query's results into a
/// single list, preserving query order and each query's internal
/// ranking order.
pub fn process_queries_joined(
    engine: &SearchEngine,
    queries: &[String],
) -> Result<Vec<ScoredDocument>> {
    Ok(process_queries(engine, queries)?.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DocumentStatus;

    fn engine() -> SearchEngine {
        let mut engine = SearchEngine::with_stop_words_text("and in the on").unwrap();
        engine
            .add_document(0, "white cat and fashionable collar", DocumentStatus::Actual, &[8])
            .unwrap();
        engine
            .add_document(1, "fluffy cat fluffy tail", DocumentStatus::Actual, &[7])
            .unwrap();
        engine
            .add_document(2, "well groomed dog expressive eyes", DocumentStatus::Actual, &[5])
            .unwrap();
        engine
    }

    #[test]
    fn process_queries_preserves_query_order() {
        let engine = engine();
        let queries = vec!["cat".to_string(), "groomed dog".to_string(), "nonexistent".to_string()];
        let results = process_queries(&engine, &queries).unwrap();
        assert_eq!(results.len(), 3);
        assert!(!results[0].is_empty());
        assert!(!results[1].is_empty());
        assert!(results[2].is_empty());
    }

    #[test]
    fn process_queries_joined_flattens_in_order() {
        let engine = engine();
        let queries = vec!["cat".to_string(), "dog".to_string()];
        let separate = process_queries(&engine, &queries).unwrap();
        let joined = process_queries_joined(&engine, &queries).unwrap();
        let expected: Vec<_> = separate.into_iter().flatten().collect();
        assert_eq!(joined, expected);
    }

    #[test]
    fn malformed_query_fails_the_whole_batch() {
        let engine = engine();
        let queries = vec!["cat".to_string(), "--dog".to_string()];
        assert!(process_queries(&engine, &queries).is_err());
    }
}
