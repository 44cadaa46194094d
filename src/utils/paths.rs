use std::path::{Path, PathBuf};

/// File extension of session transcripts
pub const SESSION_FILE_EXTENSION: &str = "jsonl";

/// Encodes a project path into Claude's project directory name by replacing
/// every path separator with a hyphen
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use cc_sessions::encode_project_path;
///
/// let path = PathBuf::from("/Users/foo/bar");
/// assert_eq!(encode_project_path(&path), "-Users-foo-bar");
/// ```
pub fn encode_project_path(path: &Path) -> String {
    path.to_string_lossy().replace(['/', '\\'], "-")
}

/// Path of `<session_id>.jsonl` inside a sessions directory
pub fn session_file_path(sessions_dir: &Path, session_id: &str) -> PathBuf {
    sessions_dir.join(format!("{}.{}", session_id, SESSION_FILE_EXTENSION))
}
