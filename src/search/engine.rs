//! [`SearchEngine`] ties the tokenizer, stop-word list, forward/inverted
//! index and TF-IDF scorer into the single facade an application talks
//! to — the equivalent of the reference `SearchServer` class.

use std::borrow::Cow;
use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::analysis::stopwords::StopWords;
use crate::analysis::tokenizer;
use crate::core::error::{Error, Result};
use crate::core::types::{self, DocumentId, DocumentRecord, DocumentStatus};
use crate::index::forward::WordFrequencies;
use crate::index::Index;
use crate::parallel::accumulator::ShardedAccumulator;
use crate::parallel::policy::ExecutionPolicy;
use crate::query::parser::{parse_query, ParsedQuery};
use crate::query::selector::actual_selector;
use crate::scoring::ranked::{rank_and_truncate, rank_and_truncate_parallel, ScoredDocument};
use crate::scoring::tfidf::inverse_document_frequency;

/// An in-memory full-text search engine over small text documents.
pub struct SearchEngine {
    stop_words: StopWords,
    index: Index,
    documents: BTreeMap<DocumentId, DocumentRecord>,
    insertion_order: Vec<DocumentId>,
}

impl SearchEngine {
    pub fn new(stop_words: StopWords) -> Self {
        SearchEngine {
            stop_words,
            index: Index::new(),
            documents: BTreeMap::new(),
            insertion_order: Vec::new(),
        }
    }

    /// Convenience constructor parsing the stop-word list out of a
    /// whitespace-separated string.
    pub fn with_stop_words_text(text: &str) -> Result<Self> {
        Ok(SearchEngine::new(StopWords::from_text(text)?))
    }

    /// Adds `document_id` with the given `text` and `ratings`. Rejects a
    /// negative id, a previously-used id, invalid control characters in
    /// `text`, and text that contains no non-stop-word terms.
    pub fn add_document(
        &mut self,
        document_id: DocumentId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i64],
    ) -> Result<()> {
        if document_id < 0 {
            return Err(Error::invalid_argument(format!(
                "document id must be non-negative, got {document_id}"
            )));
        }
        if self.documents.contains_key(&document_id) {
            return Err(Error::invalid_argument(format!(
                "document id {document_id} already exists"
            )));
        }
        let words = tokenizer::split(text);
        for &word in &words {
            if !word.is_empty() && !tokenizer::is_valid_word(word) {
                return Err(Error::invalid_argument(format!(
                    "document text contains invalid characters: {word:?}"
                )));
            }
        }
        let terms: Vec<&str> = words
            .into_iter()
            .filter(|w| !w.is_empty() && !self.stop_words.contains(w))
            .collect();
        if terms.is_empty() {
            return Err(Error::invalid_argument(
                "document has no indexable terms once stop words are removed",
            ));
        }

        self.index.index_document(document_id, &terms);
        self.documents.insert(
            document_id,
            DocumentRecord {
                average_rating: types::average_rating(ratings),
                status,
                original_text: text.to_string(),
            },
        );
        self.insertion_order.push(document_id);
        Ok(())
    }

    /// Removes a document sequentially. No-op if the id was never added.
    pub fn remove_document(&mut self, document_id: DocumentId) {
        if self.documents.remove(&document_id).is_some() {
            self.index.remove_document(document_id);
            self.insertion_order.retain(|&id| id != document_id);
        }
    }

    /// Removes a document using the parallel inverted-index sweep.
    pub fn remove_document_parallel(&mut self, document_id: DocumentId) {
        if self.documents.remove(&document_id).is_some() {
            self.index.remove_document_parallel(document_id);
            self.insertion_order.retain(|&id| id != document_id);
        }
    }

    /// Ranks documents matching `text` under `selector`, descending by
    /// relevance (ties broken by rating, then ascending id), truncated
    /// to [`types::MAX_RESULT_DOCUMENT_COUNT`].
    pub fn find_top_documents<F>(&self, text: &str, selector: F) -> Result<Vec<ScoredDocument>>
    where
        F: Fn(DocumentId, DocumentStatus, i64) -> bool + Sync,
    {
        let query = parse_query(text, &self.stop_words)?;
        let scored = self.score_query(&query, &selector);
        Ok(rank_and_truncate(scored, types::MAX_RESULT_DOCUMENT_COUNT))
    }

    /// `find_top_documents` restricted to a single status.
    pub fn find_top_documents_with_status(
        &self,
        text: &str,
        status: DocumentStatus,
    ) -> Result<Vec<ScoredDocument>> {
        self.find_top_documents(text, move |_id, doc_status, _rating| doc_status == status)
    }

    /// `find_top_documents` with the default selector (`Actual` only).
    pub fn find_top_documents_default(&self, text: &str) -> Result<Vec<ScoredDocument>> {
        self.find_top_documents(text, actual_selector())
    }

    /// Same contract as [`SearchEngine::find_top_documents`], but scores
    /// plus-terms in parallel over a [`ShardedAccumulator`] rather than
    /// folding them sequentially into a single map, and ranks with a
    /// parallel sort. Results are identical to the sequential path
    /// (same ids, same ratings, relevances within
    /// [`types::RELEVANCE_EPSILON`]).
    pub fn find_top_documents_parallel<F>(
        &self,
        text: &str,
        selector: F,
    ) -> Result<Vec<ScoredDocument>>
    where
        F: Fn(DocumentId, DocumentStatus, i64) -> bool + Sync,
    {
        let query = parse_query(text, &self.stop_words)?;
        let scored = self.score_query_parallel(&query, &selector);
        Ok(rank_and_truncate_parallel(scored, types::MAX_RESULT_DOCUMENT_COUNT))
    }

    /// `find_top_documents_parallel` restricted to a single status.
    pub fn find_top_documents_with_status_parallel(
        &self,
        text: &str,
        status: DocumentStatus,
    ) -> Result<Vec<ScoredDocument>> {
        self.find_top_documents_parallel(text, move |_id, doc_status, _rating| doc_status == status)
    }

    /// `find_top_documents_parallel` with the default selector (`Actual`
    /// only).
    pub fn find_top_documents_default_parallel(&self, text: &str) -> Result<Vec<ScoredDocument>> {
        self.find_top_documents_parallel(text, actual_selector())
    }

    /// `find_top_documents`, dispatching to the sequential or parallel
    /// path by an explicit [`ExecutionPolicy`] rather than a distinct
    /// method name — the spec's `[policy]` parameter made concrete.
    pub fn find_top_documents_with_policy<F>(
        &self,
        text: &str,
        selector: F,
        policy: ExecutionPolicy,
    ) -> Result<Vec<ScoredDocument>>
    where
        F: Fn(DocumentId, DocumentStatus, i64) -> bool + Sync,
    {
        match policy {
            ExecutionPolicy::Sequential => self.find_top_documents(text, selector),
            ExecutionPolicy::Parallel => self.find_top_documents_parallel(text, selector),
        }
    }

    /// Removes a document, dispatching to the sequential or parallel
    /// inverted-index sweep by an explicit [`ExecutionPolicy`].
    pub fn remove_document_with_policy(&mut self, document_id: DocumentId, policy: ExecutionPolicy) {
        match policy {
            ExecutionPolicy::Sequential => self.remove_document(document_id),
            ExecutionPolicy::Parallel => self.remove_document_parallel(document_id),
        }
    }

    fn score_query<F>(&self, query: &ParsedQuery, selector: &F) -> Vec<ScoredDocument>
    where
        F: Fn(DocumentId, DocumentStatus, i64) -> bool + Sync,
    {
        let total_docs = self.documents.len();
        if total_docs == 0 {
            return Vec::new();
        }

        let excluded = self.excluded_ids(query);

        let mut relevance: BTreeMap<DocumentId, f64> = BTreeMap::new();
        for plus in &query.plus_words {
            let Some(postings) = self.index.inverted().postings_for(plus) else {
                continue;
            };
            let idf = inverse_document_frequency(total_docs, postings.len());
            for (&doc_id, &tf) in postings {
                *relevance.entry(doc_id).or_insert(0.0) += tf * idf;
            }
        }

        self.materialize_scores(relevance.into_iter(), &excluded, selector)
    }

    /// Parallelizes accumulation over plus-terms (spec §4.3's "Parallel
    /// policy" step 2) using a [`ShardedAccumulator`] so concurrent
    /// workers touching the same document rarely contend for the same
    /// bucket lock.
    fn score_query_parallel<F>(&self, query: &ParsedQuery, selector: &F) -> Vec<ScoredDocument>
    where
        F: Fn(DocumentId, DocumentStatus, i64) -> bool + Sync,
    {
        let total_docs = self.documents.len();
        if total_docs == 0 {
            return Vec::new();
        }

        let excluded = self.excluded_ids(query);

        let accumulator: ShardedAccumulator<f64> = ShardedAccumulator::new();
        query.plus_words.par_iter().for_each(|plus| {
            let Some(postings) = self.index.inverted().postings_for(plus) else {
                return;
            };
            let idf = inverse_document_frequency(total_docs, postings.len());
            for (&doc_id, &tf) in postings {
                let mut guard = accumulator.acquire(doc_id);
                *guard.value_mut() += tf * idf;
            }
        });

        self.materialize_scores(accumulator.drain().into_iter(), &excluded, selector)
    }

    /// Document ids excluded by any minus-term present in the index.
    fn excluded_ids(&self, query: &ParsedQuery) -> std::collections::BTreeSet<DocumentId> {
        let mut excluded = std::collections::BTreeSet::new();
        for minus in &query.minus_words {
            if let Some(postings) = self.index.inverted().postings_for(minus) {
                excluded.extend(postings.keys().copied());
            }
        }
        excluded
    }

    /// Turns raw `doc_id -> relevance` pairs into [`ScoredDocument`]s,
    /// dropping excluded ids and ids the selector rejects.
    fn materialize_scores<F>(
        &self,
        relevance: impl Iterator<Item = (DocumentId, f64)>,
        excluded: &std::collections::BTreeSet<DocumentId>,
        selector: &F,
    ) -> Vec<ScoredDocument>
    where
        F: Fn(DocumentId, DocumentStatus, i64) -> bool + Sync,
    {
        relevance
            .filter(|(doc_id, _)| !excluded.contains(doc_id))
            .filter_map(|(doc_id, relevance)| {
                let record = self.documents.get(&doc_id)?;
                if !selector(doc_id, record.status, record.average_rating) {
                    return None;
                }
                Some(ScoredDocument {
                    id: doc_id,
                    relevance,
                    rating: record.average_rating,
                })
            })
            .collect()
    }

    /// Matches `document_id` against `text`: returns the plus-words
    /// present in the document (empty, without error, if any minus-word
    /// is present) and the document's status.
    pub fn match_document(
        &self,
        text: &str,
        document_id: DocumentId,
    ) -> Result<(std::collections::BTreeSet<String>, DocumentStatus)> {
        let record = self
            .documents
            .get(&document_id)
            .ok_or_else(|| Error::not_found(format!("no document with id {document_id}")))?;
        let query = parse_query(text, &self.stop_words)?;
        let Some(frequencies) = self.index.forward().word_frequencies(document_id) else {
            return Ok((Default::default(), record.status));
        };
        for minus in &query.minus_words {
            if frequencies.contains_key(minus) {
                return Ok((Default::default(), record.status));
            }
        }
        let matched = query
            .plus_words
            .iter()
            .filter(|term| frequencies.contains_key(term.as_str()))
            .cloned()
            .collect();
        Ok((matched, record.status))
    }

    /// Matches `document_id` against every plus-term in `text`, fanning
    /// the minus-word check and plus-term lookups out across `rayon`.
    pub fn match_document_parallel(
        &self,
        text: &str,
        document_id: DocumentId,
    ) -> Result<(std::collections::BTreeSet<String>, DocumentStatus)> {
        let record = self
            .documents
            .get(&document_id)
            .ok_or_else(|| Error::not_found(format!("no document with id {document_id}")))?;
        let query = parse_query(text, &self.stop_words)?;
        let Some(frequencies) = self.index.forward().word_frequencies(document_id) else {
            return Ok((Default::default(), record.status));
        };
        let excluded = query
            .minus_words
            .par_iter()
            .any(|minus| frequencies.contains_key(minus));
        if excluded {
            return Ok((Default::default(), record.status));
        }
        let matched = query
            .plus_words
            .par_iter()
            .filter(|term| frequencies.contains_key(term.as_str()))
            .cloned()
            .collect();
        Ok((matched, record.status))
    }

    /// `match_document`, dispatching to the sequential or parallel scan
    /// by an explicit [`ExecutionPolicy`].
    pub fn match_document_with_policy(
        &self,
        text: &str,
        document_id: DocumentId,
        policy: ExecutionPolicy,
    ) -> Result<(std::collections::BTreeSet<String>, DocumentStatus)> {
        match policy {
            ExecutionPolicy::Sequential => self.match_document(text, document_id),
            ExecutionPolicy::Parallel => self.match_document_parallel(text, document_id),
        }
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Document ids in the order they were added, skipping removed ids.
    pub fn document_ids(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.insertion_order.iter().copied()
    }

    pub fn status(&self, document_id: DocumentId) -> Option<DocumentStatus> {
        self.documents.get(&document_id).map(|r| r.status)
    }

    pub fn average_rating(&self, document_id: DocumentId) -> Option<i64> {
        self.documents.get(&document_id).map(|r| r.average_rating)
    }

    pub fn original_text(&self, document_id: DocumentId) -> Option<&str> {
        self.documents
            .get(&document_id)
            .map(|r| r.original_text.as_str())
    }

    /// This document's term frequencies, or an empty map if `document_id`
    /// was never added (or has since been removed).
    pub fn word_frequencies(&self, document_id: DocumentId) -> Cow<'_, WordFrequencies> {
        match self.index.forward().word_frequencies(document_id) {
            Some(frequencies) => Cow::Borrowed(frequencies),
            None => Cow::Owned(WordFrequencies::default()),
        }
    }
}
