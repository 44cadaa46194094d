use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::ToolUseResult;

/// ISO-8601 forms carrying an offset that RFC3339 rejects, such as a
/// colon-less `+0000` or a minute-precision `14:30Z`.
const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
];

/// ISO-8601 forms without an offset; these name a local wall-clock time.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Interpret a JSON `timestamp` value as an instant.
///
/// Accepts integers (Unix milliseconds) and ISO-8601 strings.
pub fn timestamp_from_value(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        Value::String(s) => parse_timestamp_str(s),
        _ => None,
    }
}

/// Parse an entry timestamp (e.g. `2025-09-22T11:54:10.123Z`)
pub fn parse_timestamp_str(s: &str) -> Option<DateTime<Utc>> {
    parse_iso8601(s)
}

/// Parse an ISO-8601 date-time.
///
/// RFC3339 is tried first, then offset forms RFC3339 is too strict for.
/// A date-time with no offset is read in the local timezone.
pub fn parse_iso8601(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(dt) =
        OFFSET_DATETIME_FORMATS.iter().find_map(|format| DateTime::parse_from_str(s, format).ok())
    {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Whether a decoded line "exposes" a timestamp: a non-empty string or a number.
pub fn exposed_timestamp(line: &Value) -> Option<&Value> {
    line.get("timestamp").filter(|ts| match ts {
        Value::String(s) => !s.is_empty(),
        Value::Number(_) => true,
        _ => false,
    })
}

/// Custom deserializer keeping an entry timestamp as text.
///
/// Strings pass through unchanged; integer milliseconds are rendered as
/// RFC3339 so downstream code only ever sees one textual form. Anything
/// else is treated as absent rather than failing the whole line.
pub fn deserialize_timestamp_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
        _ => None,
    })
}

/// Custom deserializer for `toolUseResult`, which is an object for shell
/// tools but a bare string (or other shape) for several others.
pub fn deserialize_tool_use_result<'de, D>(
    deserializer: D,
) -> Result<Option<ToolUseResult>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        other => Some(ToolUseResult::from_value(&other)),
    })
}

/// Custom deserializer for a `tool_result` block's `content`.
///
/// A string is kept verbatim; a list of text blocks is joined with newlines.
pub fn deserialize_tool_result_content<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Array(items) => {
            let parts: Vec<&str> = items
                .iter()
                .filter(|item| item.get("type").and_then(Value::as_str) == Some("text"))
                .filter_map(|item| item.get("text").and_then(Value::as_str))
                .collect();
            Some(parts.join("\n"))
        }
        _ => None,
    })
}
