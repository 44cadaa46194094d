pub mod display;
pub mod environment;
pub mod paths;
pub mod validation;

pub use environment::{Platform, SessionsEnv, get_projects_dir, projects_root};
pub use paths::{SESSION_FILE_EXTENSION, encode_project_path, session_file_path};
pub use validation::{validate_project_path, validate_session_id};
