/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const YELLOW: &str = "\x1b[33m";
pub const MAGENTA: &str = "\x1b[35m";

/// Row color by days until the next birthday:
/// today → magenta, within a week → yellow, otherwise none.
pub fn color_for_days_until(days: i64) -> &'static str {
    match days {
        0 => MAGENTA,
        1..=7 => YELLOW,
        _ => RESET,
    }
}

/// Wrap `value` in `color` unless it is the neutral reset color.
pub fn paint(value: &str, color: &str) -> String {
    if color == RESET {
        value.to_string()
    } else {
        format!("{color}{value}{RESET}")
    }
}
