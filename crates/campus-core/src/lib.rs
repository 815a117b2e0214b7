//! campus-core: FAQ engine for the campus assistant (knowledge store, matcher,
//! special intents, response selection and the conversation log).
//!
//! The gateway add-on owns the HTTP surface; everything here is synchronous and
//! shared behind `Arc` by the request handlers.

mod error;
mod knowledge;
mod responder;
mod shared;

pub use error::CampusError;
pub use shared::{CoreConfig, DEFAULT_ADMIN_PASSWORD, DEFAULT_HISTORY_LIMIT};

// Knowledge store + admin editor
pub use knowledge::{
    default_knowledge_base, Category, KnowledgeBase, KnowledgeSource, KnowledgeStats, KnowledgeStore, QuestionEntry,
};

// Matcher, intents, selector, conversation log
pub use responder::{
    check_special_intents, find, ConversationLog, ConversationRecord, EntryRef, PatternIndex, ResponseSelector,
    SpecialIntent, FALLBACK_RESPONSES, SPECIAL_INTENTS,
};
