use std::sync::LazyLock;

use regex::Regex;

use crate::models::ToolCall;

/// Matches `[Tool: name]` and captures the rest of that line.
static TOOL_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[Tool:\s*(\w+)\]([^\n]*)").expect("Invalid tool marker regex")
});

const SEGMENT_SEPARATOR: &str = " - ";

/// Recover tool calls from flattened text using the
/// `[Tool: name] - description - path:line` convention.
///
/// The trailing segment counts as a location only when it contains a colon;
/// otherwise it is dropped entirely.
pub fn extract_tool_calls(text: &str) -> Vec<ToolCall> {
    TOOL_MARKER_REGEX
        .captures_iter(text)
        .map(|caps| {
            let mut tool = ToolCall { tool: caps[1].to_string(), ..ToolCall::default() };

            let rest = caps.get(2).map_or("", |m| m.as_str()).trim();
            let Some(rest) = rest.strip_prefix('-') else {
                return tool;
            };

            let mut segments = rest.trim_start().splitn(2, SEGMENT_SEPARATOR);
            tool.description =
                segments.next().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string);

            if let Some(location) = segments.next().map(str::trim)
                && let Some((file_path, line)) = location.rsplit_once(':')
            {
                tool.file_path = Some(file_path.trim().to_string());
                tool.line_number = line.trim().parse().ok();
            }

            tool
        })
        .collect()
}
