use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::{Result, SessionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) { Platform::Windows } else { Platform::Unix }
    }
}

/// The environment inputs that decide where session logs live.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionsEnv {
    pub home: Option<PathBuf>,
    pub appdata: Option<PathBuf>,
}

impl SessionsEnv {
    /// Capture `HOME` (falling back to the platform home directory) and `APPDATA`.
    pub fn from_process() -> Self {
        Self {
            home: non_empty_var("HOME").map(PathBuf::from).or_else(dirs::home_dir),
            appdata: non_empty_var("APPDATA").map(PathBuf::from),
        }
    }
}

fn non_empty_var(key: &str) -> Option<OsString> {
    env::var_os(key).filter(|value| !value.is_empty())
}

/// Root directory holding one sub-directory per project.
///
/// `~/.claude/projects`, or `%APPDATA%\claude\projects` on Windows when
/// `APPDATA` is set.
pub fn projects_root(platform: Platform, env: &SessionsEnv) -> Result<PathBuf> {
    if platform == Platform::Windows
        && let Some(appdata) = &env.appdata
    {
        return Ok(appdata.join("claude").join("projects"));
    }

    let home = env.home.as_ref().ok_or(SessionError::HomeDirectoryUnavailable)?;
    Ok(home.join(".claude").join("projects"))
}

/// [`projects_root`] for the running process
pub fn get_projects_dir() -> Result<PathBuf> {
    projects_root(Platform::current(), &SessionsEnv::from_process())
}
