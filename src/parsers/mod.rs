//! JSONL parsers for Claude Code session transcripts
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach suitable for CLI tools:
//!
//! - **Individual line failures**: Malformed JSON lines (including invalid UTF-8) are
//!   logged with `tracing::warn!` and skipped. A transcript is never rejected because of
//!   its content, only because it could not be read.
//!
//! - **Timestamp sampling**: The head/tail sampler never fails. An unreadable file yields
//!   no timestamps and a warning, so one bad file cannot break a directory listing.
//!
//! - **Error propagation**: I/O failures surface as [`crate::error::SessionError`] with the
//!   attempted path in the message.

pub mod deserializers;
pub mod session;
pub mod timestamps;
pub mod tool_calls;

pub use session::{
    extract_content, extract_tools_from_content, format_tool_result, parse_session_file,
};
pub use timestamps::{SessionTimestamps, sample_session_timestamps};
pub use tool_calls::extract_tool_calls;
