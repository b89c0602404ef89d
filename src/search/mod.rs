pub mod duplicates;
pub mod engine;
pub mod processor;
pub mod window;

pub use duplicates::remove_duplicates;
pub use engine::SearchEngine;
pub use processor::{process_queries, process_queries_joined};
pub use window::RequestWindow;
