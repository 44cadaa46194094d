use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, SessionError};
use crate::utils::{encode_project_path, get_projects_dir, session_file_path};

/// Resolve a project path to its session-log directory under the
/// process-wide projects root.
///
/// # Errors
///
/// - [`SessionError::SessionsNotFound`] if no directory exists for the project
/// - [`SessionError::NotADirectory`] if the path exists but is a file
pub fn resolve_sessions_directory(project_path: &Path) -> Result<PathBuf> {
    let projects_root = get_projects_dir()?;
    resolve_sessions_directory_in(&projects_root, project_path)
}

/// Resolve a project's session-log directory under an explicit root.
///
/// The directory name is the project path with every separator replaced by
/// `-`, e.g. `/home/user/project` -> `-home-user-project`.
pub fn resolve_sessions_directory_in(projects_root: &Path, project_path: &Path) -> Result<PathBuf> {
    let sessions_dir = projects_root.join(encode_project_path(project_path));

    match fs::metadata(&sessions_dir) {
        Ok(metadata) if metadata.is_dir() => Ok(sessions_dir),
        Ok(_) => Err(SessionError::NotADirectory { path: sessions_dir }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(SessionError::SessionsNotFound {
            project_path: project_path.to_path_buf(),
            looked_in: sessions_dir,
        }),
        Err(source) => Err(SessionError::DirectoryReadFailure { path: sessions_dir, source }),
    }
}

/// Path of an existing session file, or [`SessionError::SessionFileNotFound`].
pub fn locate_session_file(sessions_dir: &Path, session_id: &str) -> Result<PathBuf> {
    let path = session_file_path(sessions_dir, session_id);

    match fs::metadata(&path) {
        Ok(_) => Ok(path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(SessionError::SessionFileNotFound { session_id: session_id.to_string() })
        }
        Err(source) => Err(SessionError::SessionReadFailure { path, source }),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_resolve_existing_project_directory() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("-home-user-project")).unwrap();

        let resolved =
            resolve_sessions_directory_in(root.path(), Path::new("/home/user/project")).unwrap();
        assert_eq!(resolved, root.path().join("-home-user-project"));
    }

    #[test]
    fn test_resolve_missing_project_directory() {
        let root = TempDir::new().unwrap();

        let err = resolve_sessions_directory_in(root.path(), Path::new("/home/user/other"))
            .unwrap_err();
        assert!(matches!(err, SessionError::SessionsNotFound { .. }));
        let msg = err.to_string();
        assert!(msg.contains("/home/user/other"));
        assert!(msg.contains("-home-user-other"));
    }

    #[test]
    fn test_resolve_file_instead_of_directory() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("-srv-app"), "not a dir").unwrap();

        let err = resolve_sessions_directory_in(root.path(), Path::new("/srv/app")).unwrap_err();
        assert!(matches!(err, SessionError::NotADirectory { .. }));
    }

    #[test]
    fn test_locate_session_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("abc.jsonl"), "").unwrap();

        assert_eq!(locate_session_file(dir.path(), "abc").unwrap(), dir.path().join("abc.jsonl"));

        let err = locate_session_file(dir.path(), "missing").unwrap_err();
        assert!(matches!(err, SessionError::SessionFileNotFound { .. }));
        assert_eq!(err.to_string(), "Session file not found: missing.jsonl");
    }
}
