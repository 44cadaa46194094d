use clap::ValueEnum;

use super::time_range::{TimeRange, is_in_range};
use crate::models::{SessionMessage, SessionMetadata};
use crate::parsers::deserializers::{exposed_timestamp, parse_timestamp_str, timestamp_from_value};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Sort sessions by effective timestamp (end, else start, else mtime).
///
/// The sort is stable, so ties keep enumeration order.
pub fn sort_sessions(sessions: &mut [SessionMetadata], order: SortOrder) {
    match order {
        SortOrder::Asc => sessions.sort_by_key(|s| s.effective_timestamp()),
        SortOrder::Desc => {
            sessions.sort_by(|a, b| b.effective_timestamp().cmp(&a.effective_timestamp()))
        }
    }
}

/// Keep sessions whose effective timestamp falls in `range`.
pub fn filter_sessions(sessions: Vec<SessionMetadata>, range: &TimeRange) -> Vec<SessionMetadata> {
    if !range.is_active() {
        return sessions;
    }
    sessions.into_iter().filter(|s| is_in_range(s.effective_timestamp(), range)).collect()
}

/// Keep messages whose own timestamp falls in `range`.
///
/// With an active range, messages without a parseable timestamp are dropped.
pub fn filter_messages(messages: Vec<SessionMessage>, range: &TimeRange) -> Vec<SessionMessage> {
    if !range.is_active() {
        return messages;
    }
    messages
        .into_iter()
        .filter(|m| parse_timestamp_str(&m.timestamp).is_some_and(|ts| is_in_range(ts, range)))
        .collect()
}

/// Filter raw JSONL lines for `view --format jsonl`.
///
/// Blank lines are dropped. Lines that are malformed or carry no parseable
/// timestamp are always kept; the rest are kept only when in range.
pub fn filter_raw_lines<'a>(content: &'a str, range: &TimeRange) -> Vec<&'a str> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter(|line| {
            let Ok(value) = serde_json::from_str::<serde_json::Value>(line) else {
                return true;
            };
            match exposed_timestamp(&value).and_then(timestamp_from_value) {
                Some(ts) => is_in_range(ts, range),
                None => true,
            }
        })
        .collect()
}
