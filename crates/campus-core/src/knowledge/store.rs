//! JSON-document-backed knowledge store with a precompiled pattern index.
//!
//! The document is rewritten wholesale on every mutation. A single `RwLock`
//! guards the knowledge base and its index; the admin editor holds the write
//! lock across its read-modify-write, chat lookups take the read lock.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use super::defaults::default_knowledge_base;
use super::types::{KnowledgeBase, KnowledgeStats, QuestionEntry};
use super::KnowledgeSource;
use crate::error::CampusError;
use crate::responder::PatternIndex;

struct Indexed {
    kb: KnowledgeBase,
    index: PatternIndex,
}

impl Indexed {
    fn new(kb: KnowledgeBase) -> Self {
        let index = PatternIndex::build(&kb);
        Self { kb, index }
    }
}

/// Process-wide knowledge base plus the path it persists to.
pub struct KnowledgeStore {
    path: PathBuf,
    state: RwLock<Indexed>,
}

impl KnowledgeStore {
    /// Opens the knowledge document at `path`.
    ///
    /// - absent: the built-in knowledge base is written to `path` and used
    /// - unreadable or malformed: logged, and the built-in knowledge base is served
    ///   without touching the existing file
    ///
    /// Only a failure to write the seed document is returned as an error.
    pub fn open_path<P: AsRef<Path>>(path: P) -> Result<Self, CampusError> {
        let path = path.as_ref().to_path_buf();
        let kb = match Self::load_document(&path) {
            Ok(kb) => {
                tracing::info!(
                    target: "campus::knowledge",
                    path = %path.display(),
                    categories = kb.total_categories(),
                    questions = kb.total_questions(),
                    "Knowledge base loaded"
                );
                kb
            }
            Err(CampusError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                let kb = default_knowledge_base();
                Self::save_document(&path, &kb)?;
                tracing::info!(target: "campus::knowledge", path = %path.display(), "Seeded default knowledge base");
                kb
            }
            Err(e) => {
                tracing::warn!(
                    target: "campus::knowledge",
                    path = %path.display(),
                    error = %e,
                    "Knowledge base unreadable; serving built-in defaults"
                );
                default_knowledge_base()
            }
        };
        Ok(Self::with_knowledge_base(path, kb))
    }

    /// Wraps an in-memory knowledge base; nothing is read from `path` until a mutation writes it.
    pub fn with_knowledge_base<P: AsRef<Path>>(path: P, kb: KnowledgeBase) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            state: RwLock::new(Indexed::new(kb)),
        }
    }

    pub fn load_document(path: &Path) -> Result<KnowledgeBase, CampusError> {
        let bytes = std::fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Writes `kb` as 2-space indented UTF-8 JSON, creating parent directories.
    pub fn save_document(path: &Path, kb: &KnowledgeBase) -> Result<(), CampusError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(kb)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Clone of the full document.
    pub fn snapshot(&self) -> KnowledgeBase {
        self.state.read().unwrap_or_else(PoisonError::into_inner).kb.clone()
    }

    pub fn stats(&self) -> KnowledgeStats {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        KnowledgeStats {
            total_questions: state.kb.total_questions(),
            total_categories: state.kb.total_categories(),
        }
    }

    /// Appends a question entry to `category` (created if missing) and persists the document.
    ///
    /// Patterns are trimmed and blanks dropped. `category` is an exact, case-sensitive
    /// key and is stored as given. The in-memory copy only changes once the write succeeded.
    pub fn add_question(&self, category: &str, patterns: &[String], response: &str) -> Result<(), CampusError> {
        let patterns: Vec<String> = patterns
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        if category.trim().is_empty() || patterns.is_empty() || response.trim().is_empty() {
            return Err(CampusError::Validation("All fields are required".to_string()));
        }

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = state.kb.clone();
        let created = next.append_question(category, QuestionEntry::new(patterns, vec![response.to_string()]));
        Self::save_document(&self.path, &next)?;
        *state = Indexed::new(next);

        tracing::info!(
            target: "campus::knowledge",
            category = %category,
            new_category = created,
            "Question added"
        );
        Ok(())
    }
}

impl KnowledgeSource for KnowledgeStore {
    fn lookup(&self, text: &str) -> Option<Vec<String>> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.index.find(text, &state.kb).map(|entry| entry.responses.clone())
    }
}
