//! Error taxonomy shared by the core and the gateway.

use thiserror::Error;

/// Failures surfaced by the knowledge store and the admin surface.
///
/// The chat path has no error states: a miss resolves to fallback text.
#[derive(Debug, Error)]
pub enum CampusError {
    /// A required admin field was missing or blank.
    #[error("validation failed: {0}")]
    Validation(String),
    /// Bad credentials or no live admin session.
    #[error("authentication failed: {0}")]
    Auth(String),
    /// The knowledge document could not be read or written.
    #[error("knowledge base I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The knowledge document is not valid JSON for a [`KnowledgeBase`](crate::KnowledgeBase).
    #[error("knowledge base JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CampusError {
    /// True for storage faults (as opposed to caller mistakes).
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Json(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_classification() {
        let io = CampusError::from(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "ro"));
        assert!(io.is_storage());
        assert!(!CampusError::Validation("category".into()).is_storage());
        assert!(!CampusError::Auth("Invalid credentials".into()).is_storage());
    }

    #[test]
    fn display_includes_detail() {
        let err = CampusError::Validation("All fields are required".into());
        assert_eq!(err.to_string(), "validation failed: All fields are required");
    }
}
