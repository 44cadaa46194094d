use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

use crate::error::SessionError;
use crate::filters::{
    SortOrder, TimeRange, filter_messages, filter_raw_lines, filter_sessions, format_time_range,
    parse_time_range, sort_sessions,
};
use crate::indexer::{list_session_files, locate_session_file, resolve_sessions_directory};
use crate::logging::init_tracing;
use crate::output::{
    ListingContext, render_session_csv, render_session_table, render_transcript_human,
    render_transcript_llm,
};
use crate::parsers::parse_session_file;
use crate::utils::{validate_project_path, validate_session_id};

#[derive(Parser)]
#[command(name = "cc-sessions")]
#[command(version = "1.0.0")]
#[command(about = "CLI tool to manage and view Claude Code sessions", long_about = None)]
pub struct Cli {
    /// Increase diagnostic output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all sessions for the project
    List {
        /// Full path to the Claude Code project
        project_path: PathBuf,

        /// Sort order by session time
        #[arg(long, value_enum, default_value_t = SortOrder::Desc)]
        sort: SortOrder,

        /// Output format
        #[arg(long, value_enum, default_value_t = ListFormat::Table)]
        format: ListFormat,

        /// Filter sessions from this time (e.g. "2023-12-15", "1d", "-10m")
        #[arg(long, allow_hyphen_values = true)]
        from: Option<String>,

        /// Filter sessions to this time (e.g. "now", "2023-12-15 14:30", "1h")
        #[arg(long, allow_hyphen_values = true)]
        to: Option<String>,

        /// Limit the number of results
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        limit: Option<u64>,
    },

    /// View a specific session
    View {
        /// Full path to the Claude Code project
        project_path: PathBuf,

        /// Session ID (file name without the .jsonl extension)
        session_id: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = ViewFormat::Llm)]
        format: ViewFormat,

        /// Filter messages from this time (e.g. "2023-12-15", "1d", "-10m")
        #[arg(long, allow_hyphen_values = true)]
        from: Option<String>,

        /// Filter messages to this time (e.g. "now", "2023-12-15 14:30", "1h")
        #[arg(long, allow_hyphen_values = true)]
        to: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Table,
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewFormat {
    Llm,
    Human,
    Jsonl,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::List { project_path, sort, format, from, to, limit } => {
            let project_path = validate_project_path(&project_path)?;
            let range = parse_time_range(from.as_deref(), to.as_deref())?;
            list_sessions(&project_path, sort, format, &range, limit)
        }
        Commands::View { project_path, session_id, format, from, to } => {
            let project_path = validate_project_path(&project_path)?;
            validate_session_id(&session_id)?;
            let range = parse_time_range(from.as_deref(), to.as_deref())?;
            view_session(&project_path, &session_id, format, &range)
        }
    }
}

fn list_sessions(
    project_path: &Path,
    sort: SortOrder,
    format: ListFormat,
    range: &TimeRange,
    limit: Option<u64>,
) -> Result<()> {
    let sessions_dir = resolve_sessions_directory(project_path)?;
    info!(dir = %sessions_dir.display(), "listing sessions");

    let mut sessions = filter_sessions(list_session_files(&sessions_dir)?, range);
    sort_sessions(&mut sessions, sort);

    if sessions.is_empty() {
        if range.is_active() {
            println!("No Claude Code sessions found in this project {}.", format_time_range(range));
        } else {
            println!("No Claude Code sessions found in this project.");
        }
        return Ok(());
    }

    let total_count = sessions.len();
    if let Some(limit) = limit {
        sessions.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    }
    debug!(shown = sessions.len(), total = total_count, "sessions selected");

    match format {
        ListFormat::Csv => println!("{}", render_session_csv(&sessions)),
        ListFormat::Table => {
            let ctx = ListingContext { project_path, sort_order: sort, time_range: range, total_count };
            println!("{}", render_session_table(&sessions, &ctx));
        }
    }

    Ok(())
}

fn view_session(
    project_path: &Path,
    session_id: &str,
    format: ViewFormat,
    range: &TimeRange,
) -> Result<()> {
    let sessions_dir = resolve_sessions_directory(project_path)?;
    let session_file = locate_session_file(&sessions_dir, session_id)?;
    info!(file = %session_file.display(), "viewing session");

    if format == ViewFormat::Jsonl {
        let bytes = fs::read(&session_file)
            .map_err(|source| SessionError::SessionReadFailure { path: session_file.clone(), source })?;
        let content = String::from_utf8_lossy(&bytes);

        if range.is_active() {
            println!("{}", filter_raw_lines(&content, range).join("\n"));
        } else {
            println!("{}", content);
        }
        return Ok(());
    }

    let messages = filter_messages(parse_session_file(&session_file)?, range);

    if messages.is_empty() {
        if range.is_active() {
            println!("No messages found in session {} {}.", session_id, format_time_range(range));
        } else {
            println!("Session {} appears to be empty or contains no valid messages.", session_id);
        }
        return Ok(());
    }

    let rendered = match format {
        ViewFormat::Human => render_transcript_human(&messages, session_id),
        _ => render_transcript_llm(&messages, session_id),
    };
    println!("{}", rendered);

    Ok(())
}
