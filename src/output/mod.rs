//! Rendering of listings and transcripts. Renderers return strings; the CLI prints them.

pub mod listing;
pub mod transcript;

pub use listing::{ListingContext, render_session_csv, render_session_table};
pub use transcript::{format_tool_call, render_transcript_human, render_transcript_llm};
