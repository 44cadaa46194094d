//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use cc_sessions::encode_project_path;
use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for a temporary HOME holding a project and its
/// `.claude/projects/<encoded>` session directory
pub struct ProjectsDirBuilder {
    home: TempDir,
    project_path: PathBuf,
}

impl ProjectsDirBuilder {
    /// Create a HOME with an existing project directory and no session logs yet
    pub fn new() -> Self {
        let home = TempDir::new().expect("Failed to create temp dir");
        let project_path = home.path().join("work").join("app");
        fs::create_dir_all(&project_path).expect("Failed to create project dir");
        Self { home, project_path }
    }

    /// Directory Claude Code would write this project's sessions to
    pub fn sessions_dir(&self) -> PathBuf {
        self.home.path().join(".claude").join("projects").join(encode_project_path(&self.project_path))
    }

    /// Create the sessions directory without any files in it
    pub fn with_sessions_dir(self) -> Self {
        fs::create_dir_all(self.sessions_dir()).expect("Failed to create sessions dir");
        self
    }

    /// Add a session file, creating the sessions directory if needed
    pub fn with_session(self, session: SessionFileBuilder) -> Self {
        let dir = self.sessions_dir();
        fs::create_dir_all(&dir).expect("Failed to create sessions dir");
        session.create_in(&dir);
        self
    }

    /// Build the fixture (consumes self)
    pub fn build(self) -> ProjectFixture {
        let sessions_dir = self.sessions_dir();
        ProjectFixture { home: self.home, project_path: self.project_path, sessions_dir }
    }
}

impl Default for ProjectsDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A built test HOME. The directory is removed when this is dropped.
pub struct ProjectFixture {
    pub home: TempDir,
    pub project_path: PathBuf,
    pub sessions_dir: PathBuf,
}

impl ProjectFixture {
    pub fn home(&self) -> &Path {
        self.home.path()
    }
}

/// Builder for one `<id>.jsonl` session file
pub struct SessionFileBuilder {
    session_id: String,
    lines: Vec<String>,
    modified: Option<SystemTime>,
}

impl SessionFileBuilder {
    pub fn new(session_id: &str) -> Self {
        Self { session_id: session_id.to_string(), lines: Vec::new(), modified: None }
    }

    /// Add a well-formed entry
    pub fn with_entry(mut self, entry: EntryBuilder) -> Self {
        self.lines.push(entry.to_json());
        self
    }

    /// Add a line verbatim (malformed JSON, blank lines, ...)
    pub fn with_raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Set the file modification time after writing
    pub fn modified(mut self, time: SystemTime) -> Self {
        self.modified = Some(time);
        self
    }

    /// File content as written to disk
    pub fn content(&self) -> String {
        let mut content = self.lines.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        content
    }

    /// Create the file in the given directory
    pub fn create_in(&self, dir: &Path) -> PathBuf {
        let path = dir.join(format!("{}.jsonl", self.session_id));
        let mut file = fs::File::create(&path).expect("Failed to create session file");
        file.write_all(self.content().as_bytes()).expect("Failed to write session file");

        if let Some(time) = self.modified {
            file.set_modified(time).expect("Failed to set mtime");
        }
        path
    }
}

/// Builder for a single transcript entry
pub struct EntryBuilder {
    entry_type: String,
    content: Value,
    timestamp: Option<Value>,
    uuid: String,
    parent_uuid: Option<String>,
    tool_use_result: Option<Value>,
}

impl EntryBuilder {
    fn new(entry_type: &str, content: Value) -> Self {
        Self {
            entry_type: entry_type.to_string(),
            content,
            timestamp: None,
            uuid: format!("{}-uuid", entry_type),
            parent_uuid: None,
            tool_use_result: None,
        }
    }

    /// User entry with plain string content
    pub fn user(text: &str) -> Self {
        Self::new("user", json!(text))
    }

    /// Assistant entry with a single text block
    pub fn assistant(text: &str) -> Self {
        Self::new("assistant", json!([{ "type": "text", "text": text }]))
    }

    /// Entry of any type with arbitrary message content
    pub fn with_content(entry_type: &str, content: Value) -> Self {
        Self::new(entry_type, content)
    }

    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = Some(json!(timestamp));
        self
    }

    /// Timestamp as epoch milliseconds
    pub fn timestamp_millis(mut self, millis: i64) -> Self {
        self.timestamp = Some(json!(millis));
        self
    }

    pub fn uuid(mut self, uuid: &str) -> Self {
        self.uuid = uuid.to_string();
        self
    }

    pub fn parent_uuid(mut self, parent: &str) -> Self {
        self.parent_uuid = Some(parent.to_string());
        self
    }

    pub fn tool_use_result(mut self, result: Value) -> Self {
        self.tool_use_result = Some(result);
        self
    }

    /// Convert to a single JSON line
    pub fn to_json(&self) -> String {
        let mut entry = json!({
            "type": self.entry_type,
            "uuid": self.uuid,
            "sessionId": "test-session",
            "message": { "role": self.entry_type, "content": self.content },
        });
        if let Some(timestamp) = &self.timestamp {
            entry["timestamp"] = timestamp.clone();
        }
        if let Some(parent) = &self.parent_uuid {
            entry["parentUuid"] = json!(parent);
        }
        if let Some(result) = &self.tool_use_result {
            entry["toolUseResult"] = result.clone();
        }
        entry.to_string()
    }
}
