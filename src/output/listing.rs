use std::path::Path;

use crate::filters::{SortOrder, TimeRange, format_time_range};
use crate::models::SessionMetadata;
use crate::utils::display::format_local_datetime;

const MIN_ID_WIDTH: usize = 12;
const DATETIME_WIDTH: usize = 22;
const DURATION_WIDTH: usize = 8;
const COLUMN_SEPARATOR: &str = " │ ";

/// What the table header needs to describe the listing
pub struct ListingContext<'a> {
    pub project_path: &'a Path,
    pub sort_order: SortOrder,
    pub time_range: &'a TimeRange,
    /// Number of sessions before `--limit` was applied
    pub total_count: usize,
}

/// Render sessions as an aligned table with a summary header.
pub fn render_session_table(sessions: &[SessionMetadata], ctx: &ListingContext<'_>) -> String {
    let shown = sessions.len();
    let mut lines: Vec<String> = Vec::with_capacity(shown + 5);

    if shown < ctx.total_count {
        lines.push(format!(
            "Showing {} of {} session(s) in {}:",
            shown,
            ctx.total_count,
            ctx.project_path.display()
        ));
    } else {
        lines.push(format!("Found {} session(s) in {}:", shown, ctx.project_path.display()));
    }

    let mut sort_info = format!("Sorted by session time ({}ending)", ctx.sort_order.as_str());
    if ctx.time_range.is_active() {
        sort_info.push_str(&format!(" • Filtered {}", format_time_range(ctx.time_range)));
    }
    lines.push(sort_info);
    lines.push(String::new());

    let id_width =
        sessions.iter().map(|s| s.session_id.chars().count()).max().unwrap_or(0).max(MIN_ID_WIDTH);
    let row = |id: &str, start: &str, end: &str, duration: &str| {
        format!(
            "{:<id_width$}{sep}{:<dt$}{sep}{:<dt$}{sep}{:<dur$}",
            id,
            start,
            end,
            duration,
            sep = COLUMN_SEPARATOR,
            dt = DATETIME_WIDTH,
            dur = DURATION_WIDTH,
        )
    };

    lines.push(row("Session ID", "Start Time", "End Time", "Duration"));
    let rule_width = id_width + DATETIME_WIDTH * 2 + DURATION_WIDTH + COLUMN_SEPARATOR.chars().count() * 3;
    lines.push("─".repeat(rule_width));

    for session in sessions {
        let start = session.start_time.as_ref().map_or("N/A".to_string(), format_local_datetime);
        let end = session.end_time.as_ref().map_or("N/A".to_string(), format_local_datetime);
        let duration = session.duration.as_deref().unwrap_or("N/A");
        lines.push(row(&session.session_id, &start, &end, duration));
    }

    lines.join("\n")
}

/// Render sessions as CSV with RFC3339 times.
pub fn render_session_csv(sessions: &[SessionMetadata]) -> String {
    let mut lines = vec!["Session ID,Start Time,End Time,Duration".to_string()];

    for session in sessions {
        let start = session.start_time.map(|t| t.to_rfc3339()).unwrap_or_default();
        let end = session.end_time.map(|t| t.to_rfc3339()).unwrap_or_default();
        let duration = session.duration.as_deref().unwrap_or("");

        lines.push(
            [session.session_id.as_str(), start.as_str(), end.as_str(), duration]
                .into_iter()
                .map(escape_csv)
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    lines.join("\n")
}

fn escape_csv(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::{TimeZone, Utc};

    use super::*;

    fn sample_sessions() -> Vec<SessionMetadata> {
        let start = Utc.with_ymd_and_hms(2025, 9, 22, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 9, 22, 11, 30, 0).unwrap();
        vec![
            SessionMetadata {
                session_id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
                file_path: PathBuf::from("/p/a.jsonl"),
                last_modified: end,
                start_time: Some(start),
                end_time: Some(end),
                message_count: 0,
                duration: Some("1h 30m".to_string()),
            },
            SessionMetadata {
                session_id: "short".to_string(),
                file_path: PathBuf::from("/p/short.jsonl"),
                last_modified: end,
                start_time: None,
                end_time: None,
                message_count: 0,
                duration: None,
            },
        ]
    }

    #[test]
    fn test_table_header_and_rows() {
        let sessions = sample_sessions();
        let range = TimeRange::default();
        let ctx = ListingContext {
            project_path: Path::new("/work/app"),
            sort_order: SortOrder::Desc,
            time_range: &range,
            total_count: 2,
        };

        let table = render_session_table(&sessions, &ctx);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Found 2 session(s) in /work/app:");
        assert_eq!(lines[1], "Sorted by session time (descending)");
        assert_eq!(lines[2], "");
        assert!(lines[3].starts_with("Session ID"));
        assert!(lines[3].contains(" │ Start Time"));
        assert!(lines[4].chars().all(|c| c == '─'));
        assert!(lines[5].contains("1h 30m"));
        assert!(lines[6].starts_with("short       "));
        assert_eq!(lines[6].matches("N/A").count(), 3);
    }

    #[test]
    fn test_table_header_mentions_limit_and_filter() {
        let sessions = sample_sessions();
        let range = TimeRange { from: Some(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()), to: None };
        let ctx = ListingContext {
            project_path: Path::new("/work/app"),
            sort_order: SortOrder::Asc,
            time_range: &range,
            total_count: 5,
        };

        let table = render_session_table(&sessions[..1], &ctx);
        assert!(table.starts_with("Showing 1 of 5 session(s) in /work/app:"));
        assert!(table.contains("Sorted by session time (ascending) • Filtered from "));
    }

    #[test]
    fn test_csv_output() {
        let csv = render_session_csv(&sample_sessions());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Session ID,Start Time,End Time,Duration");
        assert_eq!(
            lines[1],
            "550e8400-e29b-41d4-a716-446655440000,2025-09-22T10:00:00+00:00,2025-09-22T11:30:00+00:00,1h 30m"
        );
        assert_eq!(lines[2], "short,,,");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_csv_escaping() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv("two\nlines"), "\"two\nlines\"");
    }
}
