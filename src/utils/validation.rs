use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::{Result, SessionError};

/// Make `path` absolute and normalized (without resolving symlinks) and
/// check it is an existing directory.
pub fn validate_project_path(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path)
        .map_err(|_| SessionError::ProjectPathNotFound { path: path.to_path_buf() })?;
    let resolved = normalize_path(&absolute);

    match fs::metadata(&resolved) {
        Ok(metadata) if metadata.is_dir() => Ok(resolved),
        Ok(_) => Err(SessionError::ProjectNotADirectory { path: resolved }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(SessionError::ProjectPathNotFound { path: resolved })
        }
        Err(source) => Err(SessionError::DirectoryReadFailure { path: resolved, source }),
    }
}

/// Lexically drop `.` components, fold `..` into its parent and shed
/// trailing separators, so the path encodes to its sessions directory name.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Check a session id is a bare file stem: `[a-zA-Z0-9_-]+`
pub fn validate_session_id(session_id: &str) -> Result<()> {
    let invalid = |reason| Err(SessionError::InvalidSessionId { reason });

    if session_id.trim().is_empty() {
        return invalid("Session ID cannot be empty");
    }
    if session_id.contains(['/', '\\']) {
        return invalid("Session ID cannot contain path separators");
    }
    if session_id.contains('.') {
        return invalid("Session ID should not include file extension");
    }
    if !session_id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        return invalid(
            "Session ID can only contain alphanumeric characters, hyphens, and underscores",
        );
    }

    Ok(())
}
