use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Result, SessionError};
use crate::models::{
    ContentBlock, LogEntry, MessageContent, Role, SessionMessage, ToolCall, ToolUseResult,
};

const ENTRY_TYPE_USER: &str = "user";
const ENTRY_TYPE_ASSISTANT: &str = "assistant";
const WARNING_PREVIEW_CHARS: usize = 100;

/// Parse a session JSONL file into its ordered message sequence.
///
/// Blank lines are skipped. Lines that are not valid JSON entries are logged
/// and skipped; they never fail the parse. Only I/O failures are returned,
/// as [`SessionError::SessionReadFailure`].
pub fn parse_session_file(path: &Path) -> Result<Vec<SessionMessage>> {
    let file = File::open(path)
        .map_err(|source| SessionError::SessionReadFailure { path: path.to_path_buf(), source })?;

    let entries = read_entries(BufReader::new(file), path)?;
    Ok(reduce_entries(&entries))
}

/// Decode every non-blank line of `reader` into a [`LogEntry`].
pub fn read_entries<R: BufRead>(reader: R, path: &Path) -> Result<Vec<LogEntry>> {
    let mut entries = Vec::new();
    let mut skipped_count = 0;

    // Split on raw bytes so a line with invalid UTF-8 is just another malformed line
    for (line_num, line) in reader.split(b'\n').enumerate() {
        let line = line.map_err(|source| SessionError::SessionReadFailure {
            path: path.to_path_buf(),
            source,
        })?;

        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        match serde_json::from_slice::<LogEntry>(&line) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                skipped_count += 1;
                let text = String::from_utf8_lossy(&line);
                let preview: String = text.trim_end().chars().take(WARNING_PREVIEW_CHARS).collect();
                warn!(
                    path = %path.display(),
                    line = line_num + 1,
                    error = %e,
                    "Skipping malformed JSON line: {}...",
                    preview
                );
            }
        }
    }

    debug!(path = %path.display(), entries = entries.len(), skipped = skipped_count, "read session entries");

    Ok(entries)
}

/// Reduce decoded entries to messages, preserving file order.
///
/// Entries that are not `user`/`assistant` or carry no `message` are dropped.
pub fn reduce_entries(entries: &[LogEntry]) -> Vec<SessionMessage> {
    entries.iter().filter_map(reduce_entry).collect()
}

fn reduce_entry(entry: &LogEntry) -> Option<SessionMessage> {
    let message = entry.message.as_ref()?;
    let role = match entry.entry_type.as_str() {
        ENTRY_TYPE_USER => Role::User,
        ENTRY_TYPE_ASSISTANT => Role::Assistant,
        _ => return None,
    };

    let mut content = extract_content(&message.content);
    let mut tools_used = None;

    match role {
        Role::User => {
            // A tool result replaces the message text outright, even when it renders empty
            if let Some(result) = &entry.tool_use_result {
                content = format_tool_result(result);
            }
        }
        Role::Assistant => {
            let tools = extract_tools_from_content(&message.content);
            if !tools.is_empty() {
                tools_used = Some(tools);
            }
        }
    }

    Some(SessionMessage {
        role,
        content,
        timestamp: entry.timestamp.clone().unwrap_or_default(),
        tools_used,
        uuid: entry.uuid.clone().unwrap_or_default(),
        parent_uuid: entry.parent_uuid.clone().filter(|p| !p.is_empty()),
    })
}

/// Flatten message content into display text.
///
/// Text blocks contribute their text, tool invocations a `[Tool: name]`
/// marker (plus ` - description` when the input has one), tool results their
/// content. Empty pieces are dropped and the rest joined with newlines.
pub fn extract_content(content: &MessageContent) -> String {
    match content {
        MessageContent::Text(text) => text.clone(),
        MessageContent::Blocks(blocks) => blocks
            .iter()
            .map(flatten_block)
            .filter(|piece| !piece.is_empty())
            .collect::<Vec<_>>()
            .join("\n"),
        MessageContent::Other => String::new(),
    }
}

fn flatten_block(block: &ContentBlock) -> String {
    match block {
        ContentBlock::Text { text } => text.clone().unwrap_or_default(),
        ContentBlock::ToolUse { name, .. } => {
            let name = name.as_deref().unwrap_or("unknown");
            match block.tool_description() {
                Some(description) if !description.is_empty() => {
                    format!("[Tool: {}] - {}", name, description)
                }
                _ => format!("[Tool: {}]", name),
            }
        }
        ContentBlock::ToolResult { content, .. } => content.clone().unwrap_or_default(),
        ContentBlock::Unknown => String::new(),
    }
}

/// Collect the tool invocations of a block list, in order.
pub fn extract_tools_from_content(content: &MessageContent) -> Vec<ToolCall> {
    let MessageContent::Blocks(blocks) = content else {
        return Vec::new();
    };

    blocks
        .iter()
        .filter_map(|block| match block {
            ContentBlock::ToolUse { name, input, .. } => Some(ToolCall {
                tool: name.clone().unwrap_or_else(|| "unknown".to_string()),
                description: block.tool_description().map(str::to_string),
                input: input.clone(),
                ..ToolCall::default()
            }),
            _ => None,
        })
        .collect()
}

/// Render a tool execution result as `Output:` / `Error:` / `(Interrupted)` lines.
pub fn format_tool_result(result: &ToolUseResult) -> String {
    let mut parts = Vec::new();

    if let Some(stdout) = &result.stdout {
        parts.push(format!("Output: {}", stdout));
    }
    if let Some(stderr) = &result.stderr {
        parts.push(format!("Error: {}", stderr));
    }
    if result.interrupted {
        parts.push("(Interrupted)".to_string());
    }

    parts.join("\n")
}
