pub mod ranked;
pub mod tfidf;

pub use ranked::ScoredDocument;
pub use tfidf::inverse_document_frequency;
