use chrono::{DateTime, Local, TimeDelta, Utc};

/// Format an instant in local time, e.g. `9/22/2025, 11:54:10 AM`
pub fn format_local_datetime(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// Format the local time of day, e.g. `11:54:10 AM`
pub fn format_local_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%-I:%M:%S %p").to_string()
}

/// Coarse duration for session listings:
/// - `2d 7h`, `3h 15m`, `12m`, `45s`
/// - empty for 30 seconds or less (callers render that as `0s`)
pub fn format_list_duration(duration: TimeDelta) -> String {
    let seconds = duration.num_seconds();
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d {}h", days, hours % 24)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes % 60)
    } else if minutes > 0 {
        format!("{}m", minutes)
    } else if seconds > 30 {
        format!("{}s", seconds)
    } else {
        String::new()
    }
}

/// Precise duration for transcript headers: `1h 2m 3s`, `2m 3s`, `3s`
pub fn format_transcript_duration(duration: TimeDelta) -> String {
    let seconds = duration.num_seconds();
    let minutes = seconds / 60;
    let hours = minutes / 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes % 60, seconds % 60)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds % 60)
    } else {
        format!("{}s", seconds)
    }
}
