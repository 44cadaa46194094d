use chrono::{DateTime, Utc};
use crossterm::style::Stylize;

use crate::models::{Role, SessionMessage, ToolCall};
use crate::parsers::deserializers::parse_timestamp_str;
use crate::utils::display::{format_local_datetime, format_local_time, format_transcript_duration};

const HUMAN_SEPARATOR_WIDTH: usize = 50;

/// Plain transcript suited for pasting into another model's context.
pub fn render_transcript_llm(messages: &[SessionMessage], session_id: &str) -> String {
    let mut lines: Vec<String> = vec![format!("Session: {}", session_id)];
    lines.extend(summary_lines(messages));
    lines.push(String::new());

    for (i, message) in messages.iter().enumerate() {
        let label = match message.role {
            Role::User => "== USER ==",
            Role::Assistant => "== ASSISTANT ==",
        };
        lines.push(label.to_string());
        lines.push(String::new());
        lines.extend(message.content.split('\n').map(str::to_string));

        if let Some(tools) = non_empty_tools(message) {
            lines.push(String::new());
            lines.push("Tools used:".to_string());
            lines.extend(tools.iter().map(|tool| format!("- {}", format_tool_call(tool))));
        }

        if i + 1 < messages.len() {
            lines.push(String::new());
            lines.push("---".to_string());
            lines.push(String::new());
        }
    }

    lines.join("\n")
}

/// Coloured transcript for reading in a terminal.
pub fn render_transcript_human(messages: &[SessionMessage], session_id: &str) -> String {
    let mut lines: Vec<String> = vec![format!("Session: {}", session_id).bold().cyan().to_string()];
    lines.extend(summary_lines(messages).into_iter().map(|line| line.dark_grey().to_string()));
    lines.push(String::new());

    for (i, message) in messages.iter().enumerate() {
        if let Some(timestamp) = parse_timestamp_str(&message.timestamp) {
            lines.push(format!("[{}]", format_local_time(&timestamp)).dark_grey().to_string());
        }

        let is_user = message.role == Role::User;
        if is_user {
            lines.push("👤 USER".bold().blue().to_string());
        } else {
            lines.push("🤖 ASSISTANT".bold().green().to_string());
        }
        lines.push(String::new());

        for line in message.content.split('\n') {
            // assistant text keeps the terminal's default colour
            if is_user {
                lines.push(line.blue().to_string());
            } else {
                lines.push(line.to_string());
            }
        }

        if let Some(tools) = non_empty_tools(message) {
            lines.push(String::new());
            lines.push("🔧 Tools used:".yellow().bold().to_string());
            for tool in tools {
                lines.push(format!("  • {}", format_tool_call(tool)).yellow().to_string());
            }
        }

        if i + 1 < messages.len() {
            lines.push(String::new());
            lines.push("─".repeat(HUMAN_SEPARATOR_WIDTH).dark_grey().to_string());
            lines.push(String::new());
        }
    }

    lines.join("\n")
}

/// `[Tool: name] - description - path:line`, omitting absent parts.
pub fn format_tool_call(tool: &ToolCall) -> String {
    let mut result = format!("[Tool: {}]", tool.tool);

    if let Some(description) = tool.description.as_deref().filter(|d| !d.is_empty()) {
        result.push_str(" - ");
        result.push_str(description);
    }

    if let Some(path) = tool.file_path.as_deref().filter(|p| !p.is_empty()) {
        result.push_str(" - ");
        result.push_str(path);
        if let Some(line) = tool.line_number {
            result.push_str(&format!(":{}", line));
        }
    }

    result
}

fn summary_lines(messages: &[SessionMessage]) -> Vec<String> {
    let (Some(first), Some(last)) = (messages.first(), messages.last()) else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    if let Some((start, end)) = session_span(first, last) {
        lines.push(format!("Date: {}", format_local_datetime(&start)));
        lines.push(format!("Duration: {}", format_transcript_duration(end - start)));
    }
    lines.push(format!("Messages: {}", messages.len()));
    lines
}

fn session_span(
    first: &SessionMessage,
    last: &SessionMessage,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    Some((parse_timestamp_str(&first.timestamp)?, parse_timestamp_str(&last.timestamp)?))
}

fn non_empty_tools(message: &SessionMessage) -> Option<&[ToolCall]> {
    message.tools_used.as_deref().filter(|tools| !tools.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(role: Role, content: &str, timestamp: &str) -> SessionMessage {
        SessionMessage {
            role,
            content: content.to_string(),
            timestamp: timestamp.to_string(),
            tools_used: None,
            uuid: String::new(),
            parent_uuid: None,
        }
    }

    fn conversation() -> Vec<SessionMessage> {
        let mut reply = message(Role::Assistant, "Reading it now.", "2025-01-01T10:02:05Z");
        reply.tools_used = Some(vec![ToolCall {
            tool: "Read".to_string(),
            description: Some("Open config".to_string()),
            file_path: Some("src/main.rs".to_string()),
            line_number: Some(42),
            ..ToolCall::default()
        }]);
        vec![message(Role::User, "Show me main\nplease", "2025-01-01T10:00:00Z"), reply]
    }

    #[test]
    fn test_llm_transcript_layout() {
        let out = render_transcript_llm(&conversation(), "abc");
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Session: abc");
        assert!(lines[1].starts_with("Date: "));
        assert_eq!(lines[2], "Duration: 2m 5s");
        assert_eq!(lines[3], "Messages: 2");
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "== USER ==");
        assert_eq!(lines[7], "Show me main");
        assert_eq!(lines[8], "please");
        assert_eq!(lines[10], "---");
        assert_eq!(lines[12], "== ASSISTANT ==");
        assert!(out.ends_with("Tools used:\n- [Tool: Read] - Open config - src/main.rs:42"));
    }

    #[test]
    fn test_llm_transcript_without_timestamps() {
        let messages = vec![message(Role::User, "hi", "")];
        let out = render_transcript_llm(&messages, "s");
        assert!(!out.contains("Date:"));
        assert!(!out.contains("Duration:"));
        assert!(out.contains("Messages: 1"));
        assert!(!out.contains("---"));
    }

    #[test]
    fn test_llm_transcript_of_no_messages() {
        assert_eq!(render_transcript_llm(&[], "s"), "Session: s\n");
    }

    #[test]
    fn test_human_transcript_contains_labels() {
        let out = render_transcript_human(&conversation(), "abc");
        assert!(out.contains("Session: abc"));
        assert!(out.contains("👤 USER"));
        assert!(out.contains("🤖 ASSISTANT"));
        assert!(out.contains("🔧 Tools used:"));
        assert!(out.contains("  • [Tool: Read] - Open config - src/main.rs:42"));
        assert!(out.contains(&"─".repeat(HUMAN_SEPARATOR_WIDTH)));
        assert!(out.contains("Reading it now."));
    }

    #[test]
    fn test_format_tool_call_variants() {
        let bare = ToolCall { tool: "Bash".to_string(), ..ToolCall::default() };
        assert_eq!(format_tool_call(&bare), "[Tool: Bash]");

        let no_line = ToolCall {
            tool: "Edit".to_string(),
            file_path: Some("lib.rs".to_string()),
            ..ToolCall::default()
        };
        assert_eq!(format_tool_call(&no_line), "[Tool: Edit] - lib.rs");
    }
}
