//! Message timestamp helpers

use crate::constants::OLD_MESSAGE_SECS;
use chrono::{DateTime, Local};

/// Format a timestamp as a short clock time (e.g. "14:30")
pub fn format_time(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%H:%M").to_string()
}

/// Check whether a message is old (older than five minutes)
///
/// # Arguments
/// * `timestamp` - When the message was created
/// * `now` - Reference time, normally `Local::now()`
pub fn is_old_message(timestamp: &DateTime<Local>, now: &DateTime<Local>) -> bool {
    (*now - *timestamp).num_seconds() > OLD_MESSAGE_SECS
}

/// Human-readable distance from `timestamp` to `now`
///
/// # Returns
/// * `String` - "just now", "N minute(s) ago", "N hour(s) ago" or "N day(s) ago"
pub fn relative_time(timestamp: &DateTime<Local>, now: &DateTime<Local>) -> String {
    let seconds = (*now - *timestamp).num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return plural(minutes, "minute");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return plural(hours, "hour");
    }

    plural(hours / 24, "day")
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn base() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 14, 14, 30, 0).unwrap()
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(&base()), "14:30");
    }

    #[test]
    fn test_is_old_message() {
        let now = base();
        assert!(!is_old_message(&(now - Duration::minutes(5)), &now));
        assert!(is_old_message(&(now - Duration::seconds(301)), &now));
    }

    #[test]
    fn test_relative_time() {
        let now = base();
        assert_eq!(relative_time(&(now - Duration::seconds(30)), &now), "just now");
        assert_eq!(relative_time(&(now - Duration::minutes(1)), &now), "1 minute ago");
        assert_eq!(relative_time(&(now - Duration::minutes(45)), &now), "45 minutes ago");
        assert_eq!(relative_time(&(now - Duration::hours(2)), &now), "2 hours ago");
        assert_eq!(relative_time(&(now - Duration::days(1)), &now), "1 day ago");
        assert_eq!(relative_time(&(now - Duration::days(9)), &now), "9 days ago");
    }
}
