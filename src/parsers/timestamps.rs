//! Cheap start/end timestamp recovery for session listings.
//!
//! Transcripts are append-only and chronological, so the first timestamp in
//! the head window and the last one in the tail window bracket the session
//! without reading the whole file. A timestamp-bearing line that falls
//! outside the tail window (because later lines carry none) makes the end
//! time stale; that approximation is accepted in exchange for bounded I/O.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::warn;

use crate::parsers::deserializers::{exposed_timestamp, timestamp_from_value};

/// Bytes read from each end of the file
pub const SAMPLE_WINDOW_BYTES: u64 = 8 * 1024;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionTimestamps {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

/// Sample the first and last timestamp of a session file.
///
/// Never fails: if the file cannot be opened, stat'ed or read, a warning is
/// logged and both bounds are left unset.
pub fn sample_session_timestamps(path: &Path) -> SessionTimestamps {
    match try_sample(path) {
        Ok(timestamps) => timestamps,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Could not read timestamps");
            SessionTimestamps::default()
        }
    }
}

fn try_sample(path: &Path) -> io::Result<SessionTimestamps> {
    let mut file = File::open(path)?;
    let start_time = read_head_timestamp(&mut file)?;
    let end_time = read_tail_timestamp(&mut file)?;
    Ok(SessionTimestamps { start_time, end_time })
}

/// First timestamp within the head window, scanning forwards.
fn read_head_timestamp(file: &mut File) -> io::Result<Option<DateTime<Utc>>> {
    file.seek(SeekFrom::Start(0))?;
    let mut buf = Vec::with_capacity(SAMPLE_WINDOW_BYTES as usize);
    file.by_ref().take(SAMPLE_WINDOW_BYTES).read_to_end(&mut buf)?;

    Ok(buf.split(|&b| b == b'\n').find_map(line_timestamp).flatten())
}

/// Last timestamp within the tail window, scanning backwards.
fn read_tail_timestamp(file: &mut File) -> io::Result<Option<DateTime<Utc>>> {
    let file_len = file.metadata()?.len();
    let read_size = file_len.min(SAMPLE_WINDOW_BYTES);
    file.seek(SeekFrom::Start(file_len - read_size))?;

    let mut buf = Vec::with_capacity(read_size as usize);
    file.by_ref().take(read_size).read_to_end(&mut buf)?;

    Ok(buf.split(|&b| b == b'\n').rev().find_map(line_timestamp).flatten())
}

/// `Some(ts)` when the line decodes and exposes a timestamp, `None` to keep
/// scanning. The inner value is unset when the exposed timestamp is not a
/// valid instant; the scan still stops there.
fn line_timestamp(line: &[u8]) -> Option<Option<DateTime<Utc>>> {
    if line.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    let value: Value = serde_json::from_slice(line).ok()?;
    exposed_timestamp(&value).map(timestamp_from_value)
}
