//! Typed failures surfaced by the session library.
//!
//! Malformed JSONL lines never reach this type: they are skipped with a
//! warning at the parser level. Everything here is an I/O-level or
//! input-level failure that the command boundary reports to the user.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(
        "Invalid datetime format: \"{input}\". Use formats like \"2023-12-15\", \"2023-12-15 14:30\", \"1d\", \"10m\", \"-2h\", or \"now\""
    )]
    InvalidTimeFormat { input: String },

    #[error("Invalid time range: \"from\" time must be before \"to\" time")]
    InvalidRange,

    #[error("Claude Code sessions not found for project: {}\nLooked in: {}", project_path.display(), looked_in.display())]
    SessionsNotFound { project_path: PathBuf, looked_in: PathBuf },

    #[error("Sessions path exists but is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Failed to read sessions directory {}: {source}", path.display())]
    DirectoryReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read session file {}: {source}", path.display())]
    SessionReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Session file not found: {session_id}.jsonl")]
    SessionFileNotFound { session_id: String },

    #[error("Project path does not exist: {}", path.display())]
    ProjectPathNotFound { path: PathBuf },

    #[error("Path is not a directory: {}", path.display())]
    ProjectNotADirectory { path: PathBuf },

    #[error("{reason}")]
    InvalidSessionId { reason: &'static str },

    #[error("Could not determine home directory (HOME is not set)")]
    HomeDirectoryUnavailable,
}

pub type Result<T, E = SessionError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_time_format_lists_accepted_forms() {
        let err = SessionError::InvalidTimeFormat { input: "yesterday-ish".to_string() };
        let msg = err.to_string();
        assert!(msg.contains("\"yesterday-ish\""));
        assert!(msg.contains("2023-12-15 14:30"));
        assert!(msg.contains("-2h"));
        assert!(msg.contains("now"));
    }

    #[test]
    fn test_sessions_not_found_names_both_paths() {
        let err = SessionError::SessionsNotFound {
            project_path: PathBuf::from("/work/app"),
            looked_in: PathBuf::from("/home/u/.claude/projects/-work-app"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/work/app"));
        assert!(msg.contains("Looked in: /home/u/.claude/projects/-work-app"));
    }

    #[test]
    fn test_read_failure_keeps_io_source() {
        let err = SessionError::SessionReadFailure {
            path: PathBuf::from("/tmp/x.jsonl"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/tmp/x.jsonl"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
