use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::parsers::parse_session_file;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => f.write_str("user"),
            Role::Assistant => f.write_str("assistant"),
        }
    }
}

/// A normalized conversation turn reduced from one `user`/`assistant` entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionMessage {
    pub role: Role,
    pub content: String,
    /// Entry timestamp as written in the log, empty when absent
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools_used: Option<Vec<ToolCall>>,
    pub uuid: String,
    #[serde(rename = "parentUuid", skip_serializing_if = "Option::is_none")]
    pub parent_uuid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ToolCall {
    pub tool: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    /// Only ever set together with `file_path`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

/// Listing record for one session file.
///
/// Built once per directory scan from a `stat` plus a head/tail timestamp
/// sample. `message_count` stays at zero because counting needs a full parse;
/// call [`SessionMetadata::count_messages`] when the number is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionMetadata {
    pub session_id: String,
    pub file_path: PathBuf,
    pub last_modified: DateTime<Utc>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub message_count: usize,
    pub duration: Option<String>,
}

impl SessionMetadata {
    /// End time, else start time, else file modification time.
    pub fn effective_timestamp(&self) -> DateTime<Utc> {
        self.end_time.or(self.start_time).unwrap_or(self.last_modified)
    }

    /// Fully parse the session file and count its messages.
    pub fn count_messages(&self) -> Result<usize> {
        Ok(parse_session_file(&self.file_path)?.len())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn metadata(
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        modified: DateTime<Utc>,
    ) -> SessionMetadata {
        SessionMetadata {
            session_id: "s".to_string(),
            file_path: PathBuf::from("/tmp/s.jsonl"),
            last_modified: modified,
            start_time: start,
            end_time: end,
            message_count: 0,
            duration: None,
        }
    }

    #[test]
    fn test_effective_timestamp_prefers_end_then_start_then_mtime() {
        let t1 = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap();
        let t3 = Utc.with_ymd_and_hms(2025, 1, 3, 0, 0, 0).unwrap();

        assert_eq!(metadata(Some(t1), Some(t2), t3).effective_timestamp(), t2);
        assert_eq!(metadata(Some(t1), None, t3).effective_timestamp(), t1);
        assert_eq!(metadata(None, None, t3).effective_timestamp(), t3);
    }

    #[test]
    fn test_message_serializes_without_unset_fields() {
        let message = SessionMessage {
            role: Role::Assistant,
            content: "hi".to_string(),
            timestamp: String::new(),
            tools_used: None,
            uuid: "u".to_string(),
            parent_uuid: None,
        };
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["role"], "assistant");
        assert!(json.get("tools_used").is_none());
        assert!(json.get("parentUuid").is_none());
    }
}
