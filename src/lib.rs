//! An in-memory full-text search engine over small text documents.
//!
//! Documents are tagged with an identifier, a [`DocumentStatus`], and a
//! list of integer ratings. Queries are ranked by TF-IDF relevance, with
//! boolean exclusion ("minus words") and configurable stop-word
//! filtering. Bulk query workloads and index mutations can run
//! sequentially or fanned out across a data-parallel thread pool.
//!
//! The moving parts, leaves first:
//! - [`analysis`] — whitespace tokenizer and stop-word set.
//! - [`index`] — the inverted index and forward index (terms are owned
//!   `String`s rather than interned against a separate pool).
//! - [`parallel`] — the sharded concurrent accumulator used to reduce
//!   write contention while scoring in parallel, and the execution
//!   policy shared by every sequential/parallel operation pair.
//! - [`scoring`] — TF-IDF math and ranking tie-break rules.
//! - [`query`] — query parsing and document selectors.
//! - [`search`] — [`search::SearchEngine`], the bulk query processor,
//!   the request window, and duplicate-document removal.

pub mod core;
pub mod analysis;
pub mod index;
pub mod parallel;
pub mod scoring;
pub mod query;
pub mod search;

pub use core::error::{Error, ErrorKind, Result};
pub use core::types::{DocumentId, DocumentStatus};
pub use parallel::policy::ExecutionPolicy;
pub use search::engine::SearchEngine;
