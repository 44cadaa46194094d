//! Data models for Claude Code session transcripts.
//!
//! - [`LogEntry`] - One raw JSONL line, decoded leniently
//! - [`MessageContent`] / [`ContentBlock`] - Plain text or typed content blocks
//! - [`SessionMessage`] / [`ToolCall`] - Normalized conversation turns
//! - [`SessionMetadata`] - Per-file listing record

pub mod entry;
pub mod session;

pub use entry::{ContentBlock, LogEntry, Message, MessageContent, ToolUseResult};
pub use session::{Role, SessionMessage, SessionMetadata, ToolCall};
