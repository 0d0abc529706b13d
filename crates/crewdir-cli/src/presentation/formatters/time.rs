use chrono::{DateTime, Utc};

/// Human relative time for refresh stamps, e.g. "12s ago".
pub fn format_relative(ts: DateTime<Utc>) -> String {
    let seconds = Utc::now().signed_duration_since(ts).num_seconds().max(0);

    if seconds < 5 {
        "just now".to_string()
    } else if seconds < 60 {
        format!("{}s ago", seconds)
    } else if seconds < 3600 {
        format!("{}m ago", seconds / 60)
    } else {
        format!("{}h ago", seconds / 3600)
    }
}
