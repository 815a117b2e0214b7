//! Whole-word literal matcher over the knowledge base.
//!
//! Every pattern is compiled once into `\b<escaped>\b` (case-insensitive, Unicode word
//! class) and kept in storage scan order, so the first hit is the same entry a nested
//! category → question → pattern scan would return.

use regex::{Regex, RegexBuilder};

use crate::knowledge::{KnowledgeBase, QuestionEntry};

/// Position of a question entry inside a [`KnowledgeBase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryRef {
    pub category: usize,
    pub question: usize,
}

/// Precompiled patterns for one knowledge base snapshot. Rebuild after every mutation.
#[derive(Debug, Default)]
pub struct PatternIndex {
    compiled: Vec<(EntryRef, Regex)>,
}

impl PatternIndex {
    pub fn build(kb: &KnowledgeBase) -> Self {
        let mut compiled = Vec::new();
        for (ci, category) in kb.categories.iter().enumerate() {
            for (qi, question) in category.questions.iter().enumerate() {
                for pattern in &question.patterns {
                    if let Some(re) = compile_literal(pattern) {
                        compiled.push((EntryRef { category: ci, question: qi }, re));
                    }
                }
            }
        }
        Self { compiled }
    }

    /// Number of compiled (non-blank) patterns.
    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }

    /// First entry with any pattern occurring whole-word in `text`.
    pub fn locate(&self, text: &str) -> Option<EntryRef> {
        let text = text.trim().to_lowercase();
        if text.is_empty() {
            return None;
        }
        self.compiled
            .iter()
            .find(|(_, re)| re.is_match(&text))
            .map(|(at, _)| *at)
    }

    /// Resolves [`PatternIndex::locate`] against `kb`, which must be the snapshot the index was built from.
    pub fn find<'kb>(&self, text: &str, kb: &'kb KnowledgeBase) -> Option<&'kb QuestionEntry> {
        let at = self.locate(text)?;
        kb.categories.get(at.category)?.questions.get(at.question)
    }
}

/// One-shot match without a prebuilt index.
pub fn find<'kb>(text: &str, kb: &'kb KnowledgeBase) -> Option<&'kb QuestionEntry> {
    PatternIndex::build(kb).find(text, kb)
}

fn compile_literal(pattern: &str) -> Option<Regex> {
    if pattern.trim().is_empty() {
        return None;
    }
    let source = format!(r"\b{}\b", regex::escape(pattern));
    match RegexBuilder::new(&source).case_insensitive(true).build() {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(target: "campus::knowledge", pattern = %pattern, error = %e, "Skipping uncompilable pattern");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::{default_knowledge_base, Category};

    /// Patterns within one entry are separated by `|`.
    fn kb(entries: &[(&str, &str, &str)]) -> KnowledgeBase {
        let mut kb = KnowledgeBase::default();
        for &(cat, patterns, response) in entries {
            kb.append_question(
                cat,
                QuestionEntry::new(
                    patterns.split('|').map(str::to_string).collect(),
                    vec![response.to_string()],
                ),
            );
        }
        kb
    }

    #[test]
    fn word_boundary_is_respected() {
        let kb = kb(&[("fees", "fee", "fee answer")]);
        assert!(find("I want to give feedback", &kb).is_none());
        let hit = find("What is the fee structure?", &kb).expect("fee should match");
        assert_eq!(hit.responses, vec!["fee answer".to_string()]);
    }

    #[test]
    fn matching_ignores_case_and_surrounding_space() {
        let kb = kb(&[("campus", "Central Library", "lib")]);
        assert!(find("   where is the CENTRAL library?  ", &kb).is_some());
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let kb = kb(&[("x", "b.tech", "dotted")]);
        assert!(find("tell me about b.tech", &kb).is_some());
        assert!(find("tell me about bxtech", &kb).is_none());
    }

    #[test]
    fn empty_input_and_blank_patterns_never_match() {
        let kb = kb(&[("x", "|  ", "never")]);
        assert_eq!(PatternIndex::build(&kb).len(), 0);
        assert!(find("", &kb).is_none());
        assert!(find("anything at all", &kb).is_none());
        assert!(find("", &default_knowledge_base()).is_none());
    }

    #[test]
    fn first_entry_in_storage_order_wins() {
        let kb = kb(&[
            ("a", "library", "first"),
            ("b", "central library", "second"),
        ]);
        let hit = find("central library timings", &kb).unwrap();
        assert_eq!(hit.responses[0], "first");
    }

    #[test]
    fn unicode_letters_are_word_characters() {
        let kb = kb(&[("x", "café", "coffee")]);
        assert!(find("is there a café on campus", &kb).is_some());
        assert!(find("cafés nearby", &kb).is_none());
    }

    #[test]
    fn every_default_pattern_selects_its_entry() {
        let kb = default_knowledge_base();
        let index = PatternIndex::build(&kb);
        // "location map" is shadowed by the earlier contact entry's "location" pattern.
        let shadowed = ["location map"];
        for Category { name, questions } in &kb.categories {
            for entry in questions {
                for pattern in &entry.patterns {
                    if shadowed.contains(&pattern.as_str()) {
                        continue;
                    }
                    let text = format!("could you tell me about {} please", pattern.to_uppercase());
                    let hit = index
                        .find(&text, &kb)
                        .unwrap_or_else(|| panic!("{name}: {pattern} did not match"));
                    assert_eq!(hit, entry, "{name}: {pattern} matched a different entry");
                }
            }
        }
    }

    #[test]
    fn shadowed_pattern_resolves_to_earlier_entry() {
        let kb = default_knowledge_base();
        let hit = find("send me the location map", &kb).unwrap();
        assert!(hit.patterns.contains(&"location".to_string()));
    }

    #[test]
    fn index_from_other_snapshot_does_not_panic() {
        let big = default_knowledge_base();
        let small = KnowledgeBase::default();
        let index = PatternIndex::build(&big);
        assert!(index.find("hostel fees", &small).is_none());
    }
}
