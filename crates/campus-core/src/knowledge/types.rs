//! Persisted shape of the knowledge document.

use serde::{Deserialize, Serialize};

/// One FAQ entry: any pattern selects one of the responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionEntry {
    /// Literal phrases, matched whole-word and case-insensitively.
    pub patterns: Vec<String>,
    pub responses: Vec<String>,
}

impl QuestionEntry {
    pub fn new(patterns: Vec<String>, responses: Vec<String>) -> Self {
        Self { patterns, responses }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Exact, case-sensitive key used by the admin editor.
    pub name: String,
    #[serde(default)]
    pub questions: Vec<QuestionEntry>,
}

/// Ordered categories; scan order is storage order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl KnowledgeBase {
    /// Number of question entries summed across categories.
    pub fn total_questions(&self) -> usize {
        self.categories.iter().map(|c| c.questions.len()).sum()
    }

    pub fn total_categories(&self) -> usize {
        self.categories.len()
    }

    /// Appends `entry` to the first category named `category`, creating the category
    /// at the end when none exists. Returns true when a new category was created.
    pub fn append_question(&mut self, category: &str, entry: QuestionEntry) -> bool {
        match self.categories.iter_mut().find(|c| c.name == category) {
            Some(existing) => {
                existing.questions.push(entry);
                false
            }
            None => {
                self.categories.push(Category {
                    name: category.to_string(),
                    questions: vec![entry],
                });
                true
            }
        }
    }
}

/// Counts reported by the admin stats endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeStats {
    pub total_questions: usize,
    pub total_categories: usize,
}
