//! Reusable formatting utilities for CLI output

use chrono::{DateTime, Local, Utc};

/// Placeholder for absent or unparseable values
pub const NOT_AVAILABLE: &str = "N/A";

/// Format an instant as local wall-clock time, e.g. `14:30:05`.
///
/// Returns "N/A" if the timestamp is absent.
pub fn format_time_local(timestamp: Option<&DateTime<Utc>>) -> String {
    match timestamp {
        Some(dt) => dt.with_timezone(&Local).format("%H:%M:%S").to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Format an instant as local date and time, e.g. `2025-01-15 14:30:05`.
pub fn format_datetime_local(timestamp: Option<&DateTime<Utc>>) -> String {
    match timestamp {
        Some(dt) => dt
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Replace terminal control characters so message text cannot drive the
/// terminal. Tabs become spaces.
pub fn sanitize_terminal(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\t' => ' ',
            c if c.is_control() => char::REPLACEMENT_CHARACTER,
            c => c,
        })
        .collect()
}

/// Truncate to `max_chars` characters with an ellipsis
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
