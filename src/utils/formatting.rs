//! Formatting utilities used for CLI output.

use chrono::NaiveDate;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// "today", "tomorrow" or "in N days".
pub fn describe_days_until(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        n => format!("in {} days", n),
    }
}

pub fn describe_reminder(last: Option<&NaiveDate>) -> String {
    match last {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => "--".to_string(),
    }
}
