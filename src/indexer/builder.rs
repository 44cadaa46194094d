//! Session listing for one project directory.
//!
//! Listing never does a full parse. Each file gets a `stat` plus a bounded
//! head/tail timestamp sample, so cost stays flat as transcripts grow. Each
//! file is an independent, read-only job, which lets the listing fan them
//! out across a thread pool while keeping directory order.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Result, SessionError};
use crate::models::SessionMetadata;
use crate::parsers::sample_session_timestamps;
use crate::utils::SESSION_FILE_EXTENSION;
use crate::utils::display::format_list_duration;

/// Build metadata for every `*.jsonl` file directly inside `sessions_dir`.
///
/// Entries are enumerated in file-name order. `message_count` is left at 0.
///
/// # Errors
///
/// Returns [`SessionError::DirectoryReadFailure`] if the directory cannot be
/// enumerated, and [`SessionError::SessionReadFailure`] if a listed file
/// cannot be stat'ed.
pub fn list_session_files(sessions_dir: &Path) -> Result<Vec<SessionMetadata>> {
    let mut files: Vec<PathBuf> = Vec::new();

    for entry in WalkDir::new(sessions_dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| SessionError::DirectoryReadFailure {
            path: sessions_dir.to_path_buf(),
            source: e.into(),
        })?;

        let path = entry.path();
        if entry.file_type().is_dir()
            || path.extension().and_then(|ext| ext.to_str()) != Some(SESSION_FILE_EXTENSION)
        {
            continue;
        }
        files.push(path.to_path_buf());
    }

    debug!(dir = %sessions_dir.display(), files = files.len(), "enumerated session files");

    files.par_iter().map(|path| session_metadata(path)).collect()
}

/// Build the [`SessionMetadata`] for a single session file.
pub fn session_metadata(path: &Path) -> Result<SessionMetadata> {
    let read_failure = |source| SessionError::SessionReadFailure { path: path.to_path_buf(), source };

    let modified = fs::metadata(path).and_then(|m| m.modified()).map_err(read_failure)?;
    let timestamps = sample_session_timestamps(path);

    let session_id = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let duration = match (timestamps.start_time, timestamps.end_time) {
        (Some(start), Some(end)) => {
            let text = format_list_duration(end - start);
            Some(if text.is_empty() { "0s".to_string() } else { text })
        }
        _ => None,
    };

    Ok(SessionMetadata {
        session_id,
        file_path: path.to_path_buf(),
        last_modified: DateTime::<Utc>::from(modified),
        start_time: timestamps.start_time,
        end_time: timestamps.end_time,
        message_count: 0,
        duration,
    })
}
