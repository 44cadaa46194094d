//! Time-range parsing plus sorting and filtering of sessions and messages.
//!
//! Sessions are ordered and filtered by one effective timestamp: end time,
//! else start time, else file modification time.

pub mod apply;
pub mod time_range;

pub use apply::{SortOrder, filter_messages, filter_raw_lines, filter_sessions, sort_sessions};
pub use time_range::{
    TimeRange, format_time_range, is_in_range, parse_time_input, parse_time_range,
};
