//! Tracks, over a fixed trailing window of requests, how many returned
//! no results. Mirrors `original_source/request_queue.cpp`'s
//! `RequestQueue` exactly, including its drop-oldest-then-push ordering.

use std::collections::VecDeque;

use crate::core::types::{DocumentStatus, REQUEST_WINDOW_SIZE};
use crate::scoring::ranked::ScoredDocument;
use crate::search::engine::SearchEngine;

/// Records whether each of the last [`REQUEST_WINDOW_SIZE`] requests
/// returned results, so `empty_result_count` always reflects the window
/// currently in scope.
pub struct RequestWindow {
    history: VecDeque<bool>,
    empty_result_count: usize,
    window_size: usize,
}

impl RequestWindow {
    pub fn new() -> Self {
        RequestWindow::with_window_size(REQUEST_WINDOW_SIZE)
    }

    pub fn with_window_size(window_size: usize) -> Self {
        RequestWindow {
            history: VecDeque::with_capacity(window_size),
            empty_result_count: 0,
            window_size,
        }
    }

    /// Records one request's outcome, evicting the oldest entry first
    /// if the window is already full.
    fn record(&mut self, was_empty: bool) {
        if self.history.len() >= self.window_size {
            if let Some(true) = self.history.pop_front() {
                self.empty_result_count -= 1;
            }
        }
        self.history.push_back(was_empty);
        if was_empty {
            self.empty_result_count += 1;
        }
    }

    /// Runs `text` against `engine`'s default selector, recording and
    /// returning the outcome.
    pub fn add_find_request(
        &mut self,
        engine: &SearchEngine,
        text: &str,
    ) -> crate::core::error::Result<Vec<ScoredDocument>> {
        let results = engine.find_top_documents_default(text)?;
        self.record(results.is_empty());
        Ok(results)
    }

    /// Runs `text` against `engine` restricted to `status`, recording
    /// and returning the outcome.
    pub fn add_find_request_with_status(
        &mut self,
        engine: &SearchEngine,
        text: &str,
        status: DocumentStatus,
    ) -> crate::core::error::Result<Vec<ScoredDocument>> {
        let results = engine.find_top_documents_with_status(text, status)?;
        self.record(results.is_empty());
        Ok(results)
    }

    pub fn no_result_requests(&self) -> usize {
        self.empty_result_count
    }
}

impl Default for RequestWindow {
    fn default() -> Self {
        RequestWindow::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DocumentStatus;

    fn engine_with_one_document() -> SearchEngine {
        let mut engine = SearchEngine::with_stop_words_text("and in the on").unwrap();
        engine.add_document(0, "cat", DocumentStatus::Actual, &[1]).unwrap();
        engine
    }

    #[test]
    fn window_of_all_empty_requests_counts_all_of_them() {
        let engine = SearchEngine::with_stop_words_text("and in the on").unwrap();
        let mut window = RequestWindow::with_window_size(4);
        for _ in 0..4 {
            window.add_find_request(&engine, "cat").unwrap();
        }
        assert_eq!(window.no_result_requests(), 4);
    }

    #[test]
    fn eviction_drops_the_oldest_empty_result_out_of_the_count() {
        let engine = engine_with_one_document();
        let mut window = RequestWindow::with_window_size(3);
        window.add_find_request(&engine, "nothing").unwrap();
        window.add_find_request(&engine, "nothing").unwrap();
        window.add_find_request(&engine, "nothing").unwrap();
        assert_eq!(window.no_result_requests(), 3);

        window.add_find_request(&engine, "cat").unwrap();
        assert_eq!(window.no_result_requests(), 2);
    }

    #[test]
    fn matches_the_reference_1440_window_scenario() {
        let engine = engine_with_one_document();
        let mut window = RequestWindow::new();
        for _ in 0..1439 {
            window.add_find_request(&engine, "nothing").unwrap();
        }
        window.add_find_request(&engine, "cat").unwrap();
        window.add_find_request(&engine, "cat").unwrap();
        window.add_find_request(&engine, "cat").unwrap();
        assert_eq!(window.no_result_requests(), 1437);
    }
}
