use chrono::{DateTime, Utc};
use web_sys::window;

/// Get the page origin (e.g., "http://localhost:3000" or "https://the404.example")
pub fn origin() -> String {
    let window = window().expect("no global window");
    let location = window.location();

    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location
        .host()
        .unwrap_or_else(|_| "localhost:3000".to_string());

    format!("{}//{}", protocol, host)
}

/// Build a same-origin URL from a path (e.g., "/api/auth/login")
pub fn api_url(path: &str) -> String {
    format!("{}{}", origin(), path)
}

/// Format resident memory bytes for display (e.g., 52428800 -> "50.0 MB")
pub fn format_memory(bytes: u64) -> String {
    let mb = bytes as f64 / (1024.0 * 1024.0);
    format!("{:.1} MB", mb)
}

/// Compact uptime from milliseconds (e.g., "2d 3h", "5m", "42s")
pub fn format_uptime(ms: u64) -> String {
    let seconds = ms / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d {}h", days, hours % 24)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes % 60)
    } else if minutes > 0 {
        format!("{}m", minutes)
    } else {
        format!("{}s", seconds)
    }
}

/// Short display form of a backend timestamp
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}
