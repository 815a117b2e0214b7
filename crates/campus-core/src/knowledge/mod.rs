//! FAQ knowledge base: categories of question entries, persisted as one JSON document.
//!
//! ## Document layout
//!
//! ```json
//! { "categories": [ { "name": "fees", "questions": [ { "patterns": [...], "responses": [...] } ] } ] }
//! ```
//!
//! Categories and questions are scanned in storage order; the admin editor only appends.

mod defaults;
mod store;
mod types;

pub use defaults::default_knowledge_base;
pub use store::KnowledgeStore;
pub use types::{Category, KnowledgeBase, KnowledgeStats, QuestionEntry};

/// Anything the response selector can ask for a matching entry's responses.
pub trait KnowledgeSource: Send + Sync {
    /// Responses of the first entry whose pattern occurs whole-word in `text`.
    fn lookup(&self, text: &str) -> Option<Vec<String>>;
}
