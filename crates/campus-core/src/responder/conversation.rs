//! In-memory, append-only record of chat inputs. Not persisted across restarts.

use serde::{Deserialize, Serialize};
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationRecord {
    /// Normalized (trimmed, lower-cased) user text.
    #[serde(rename = "user")]
    pub user_text: String,
    /// Local ISO-8601 timestamp with microseconds.
    pub timestamp: String,
}

impl ConversationRecord {
    /// Creates a record stamped with the current local time.
    pub fn now(user_text: impl Into<String>) -> Self {
        Self {
            user_text: user_text.into(),
            timestamp: chrono::Local::now()
                .naive_local()
                .format("%Y-%m-%dT%H:%M:%S%.6f")
                .to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ConversationLog {
    records: Mutex<Vec<ConversationRecord>>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, record: ConversationRecord) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The last `limit` records, oldest first.
    pub fn recent(&self, limit: usize) -> Vec<ConversationRecord> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        let start = records.len().saturating_sub(limit);
        records[start..].to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_returns_tail_in_call_order() {
        let log = ConversationLog::new();
        for i in 0..15 {
            log.append(ConversationRecord::now(format!("msg {i}")));
        }
        assert_eq!(log.len(), 15);
        let tail = log.recent(10);
        assert_eq!(tail.len(), 10);
        assert_eq!(tail.first().unwrap().user_text, "msg 5");
        assert_eq!(tail.last().unwrap().user_text, "msg 14");
    }

    #[test]
    fn recent_with_fewer_records_returns_all() {
        let log = ConversationLog::new();
        assert!(log.recent(10).is_empty());
        log.append(ConversationRecord::now("a"));
        log.append(ConversationRecord::now("b"));
        let all: Vec<String> = log.recent(10).into_iter().map(|r| r.user_text).collect();
        assert_eq!(all, ["a", "b"]);
    }

    #[test]
    fn record_serializes_with_user_key_and_iso_timestamp() {
        let rec = ConversationRecord::now("hostel");
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["user"], "hostel");
        let ts = json["timestamp"].as_str().unwrap();
        assert!(chrono::NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f").is_ok(), "{ts}");
    }
}
