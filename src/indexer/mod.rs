//! Session directory index for one project
//!
//! # Error Handling Strategy
//!
//! - **Directory-level failures**: A missing project directory, a file where a directory is
//!   expected, or an unreadable directory are hard errors carrying the attempted path.
//!
//! - **File-level degradation**: Timestamp sampling for an individual file never fails; an
//!   unreadable file is listed with its modification time only and a warning is logged.
//!
//! - **Empty results**: A project with no session files is an empty listing, not an error.

pub mod builder;
pub mod project_discovery;

pub use builder::{list_session_files, session_metadata};
pub use project_discovery::{
    locate_session_file, resolve_sessions_directory, resolve_sessions_directory_in,
};
