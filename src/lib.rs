//! cc-sessions - List and view Claude Code session transcripts
//!
//! Claude Code keeps one JSONL transcript per session under
//! `~/.claude/projects/<encoded-project-path>/`. This library:
//!
//! - Resolves a project path to its session-log directory
//! - Lists sessions with start/end times sampled from the head and tail of each file
//! - Parses transcripts into user/assistant messages, tolerating malformed lines
//! - Filters sessions and messages by absolute or relative time ranges
//! - Renders listings (table, CSV) and transcripts (plain, coloured, raw)
//!
//! # Example
//!
//! ```no_run
//! use cc_sessions::{list_session_files, resolve_sessions_directory};
//! use std::path::Path;
//!
//! let dir = resolve_sessions_directory(Path::new("/Users/alice/work/app"))?;
//! for session in list_session_files(&dir)? {
//!     println!("{} {:?}", session.session_id, session.duration);
//! }
//! # Ok::<(), cc_sessions::SessionError>(())
//! ```

pub mod cli;
pub mod error;
pub mod filters;
pub mod indexer;
pub mod logging;
pub mod models;
pub mod output;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use error::{Result, SessionError};
pub use filters::{TimeRange, parse_time_range};
pub use indexer::{list_session_files, locate_session_file, resolve_sessions_directory};
pub use models::{SessionMessage, SessionMetadata, ToolCall};
pub use parsers::{extract_tool_calls, parse_session_file, sample_session_timestamps};
pub use utils::paths::encode_project_path;
