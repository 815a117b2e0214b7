//! Response selection: special intents, then the knowledge base, then fallback text.

mod conversation;
mod intents;
mod matcher;

pub use conversation::{ConversationLog, ConversationRecord};
pub use intents::{check_special_intents, SpecialIntent, SPECIAL_INTENTS};
pub use matcher::{find, EntryRef, PatternIndex};

use crate::knowledge::KnowledgeSource;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::{Arc, Mutex, PoisonError};

/// Returned when neither an intent nor a knowledge entry matches.
pub const FALLBACK_RESPONSES: [&str; 4] = [
    "I'm here to help with ADTU-related queries. Could you ask about admissions, courses, campus facilities, or placements?",
    "That's an interesting question! For detailed information, please visit www.adtu.in or contact admission office.",
    "I specialize in ADTU information. You can ask me about courses, fees, campus life, or admission process.",
    "I want to provide accurate information. Could you rephrase your question or contact info@adtu.in for specific queries?",
];

/// Top-level chat entry point. Always produces exactly one response.
pub struct ResponseSelector {
    knowledge: Arc<dyn KnowledgeSource>,
    log: Arc<ConversationLog>,
    rng: Mutex<StdRng>,
}

impl ResponseSelector {
    /// Selector with an entropy-seeded random source.
    pub fn new(knowledge: Arc<dyn KnowledgeSource>, log: Arc<ConversationLog>) -> Self {
        Self::with_seed(knowledge, log, None)
    }

    /// `Some(seed)` makes response choice reproducible.
    pub fn with_seed(knowledge: Arc<dyn KnowledgeSource>, log: Arc<ConversationLog>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            knowledge,
            log,
            rng: Mutex::new(rng),
        }
    }

    pub fn log(&self) -> &Arc<ConversationLog> {
        &self.log
    }

    pub fn respond(&self, text: &str) -> String {
        let normalized = text.trim().to_lowercase();
        self.log.append(ConversationRecord::now(normalized.as_str()));

        if let Some(intent) = check_special_intents(&normalized) {
            if let Some(response) = self.pick(intent.responses) {
                tracing::debug!(target: "campus::chat", intent = intent.name, "Special intent matched");
                return response;
            }
        }

        if let Some(responses) = self.knowledge.lookup(&normalized) {
            if let Some(response) = self.pick(&responses) {
                tracing::debug!(target: "campus::chat", "Knowledge entry matched");
                return response;
            }
        }

        tracing::debug!(target: "campus::chat", "No match; using fallback");
        self.pick(&FALLBACK_RESPONSES)
            .unwrap_or_else(|| FALLBACK_RESPONSES[0].to_string())
    }

    fn pick<S: AsRef<str>>(&self, options: &[S]) -> Option<String> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        options.choose(&mut *rng).map(|s| s.as_ref().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::{default_knowledge_base, KnowledgeBase, KnowledgeStore};

    fn selector_over(kb: KnowledgeBase) -> ResponseSelector {
        let store = Arc::new(KnowledgeStore::with_knowledge_base("unused.json", kb));
        ResponseSelector::with_seed(store, Arc::new(ConversationLog::new()), Some(42))
    }

    fn greeting_responses() -> &'static [&'static str] {
        SPECIAL_INTENTS[0].responses
    }

    #[test]
    fn greeting_takes_precedence_over_knowledge() {
        let mut kb = default_knowledge_base();
        kb.append_question(
            "fees",
            crate::QuestionEntry::new(vec!["fees".into()], vec!["fee answer".into()]),
        );
        let selector = selector_over(kb);
        let reply = selector.respond("hello, what are your fees?");
        assert!(greeting_responses().contains(&reply.as_str()), "got {reply}");
    }

    #[test]
    fn knowledge_entry_answers_when_no_intent() {
        let selector = selector_over(default_knowledge_base());
        let reply = selector.respond("  What is the FEE STRUCTURE?  ");
        assert!(reply.starts_with("Approximate annual fees"), "got {reply}");
    }

    #[test]
    fn unmatched_text_falls_back() {
        let selector = selector_over(default_knowledge_base());
        for text in ["xyzzy", "", "   ", "quantum mechanics"] {
            let reply = selector.respond(text);
            assert!(FALLBACK_RESPONSES.contains(&reply.as_str()), "{text:?} -> {reply}");
        }
    }

    #[test]
    fn every_call_is_logged_in_order() {
        let selector = selector_over(default_knowledge_base());
        let inputs: Vec<String> = (0..12).map(|i| format!("Question {i}")).collect();
        for input in &inputs {
            selector.respond(input);
        }
        assert_eq!(selector.log().len(), 12);
        let tail = selector.log().recent(10);
        assert_eq!(tail.len(), 10);
        assert_eq!(tail[0].user_text, "question 2");
        assert_eq!(tail[9].user_text, "question 11");
    }

    #[test]
    fn seeded_selectors_agree() {
        let a = selector_over(default_knowledge_base());
        let b = selector_over(default_knowledge_base());
        for text in ["hey", "thanks", "bye", "nothing here", "nope"] {
            assert_eq!(a.respond(text), b.respond(text));
        }
    }

    #[test]
    fn entry_without_responses_falls_through_to_fallback() {
        let mut kb = KnowledgeBase::default();
        kb.append_question("x", crate::QuestionEntry::new(vec!["hostel".into()], vec![]));
        let selector = selector_over(kb);
        let reply = selector.respond("hostel");
        assert!(FALLBACK_RESPONSES.contains(&reply.as_str()));
    }

    struct FixedSource(Vec<String>);

    impl KnowledgeSource for FixedSource {
        fn lookup(&self, _text: &str) -> Option<Vec<String>> {
            Some(self.0.clone())
        }
    }

    #[test]
    fn any_knowledge_source_can_back_the_selector() {
        let source = Arc::new(FixedSource(vec!["fixed".into()]));
        let selector = ResponseSelector::new(source, Arc::new(ConversationLog::new()));
        assert_eq!(selector.respond("whatever"), "fixed");
        // intents still win
        assert!(greeting_responses().contains(&selector.respond("hey").as_str()));
    }
}
