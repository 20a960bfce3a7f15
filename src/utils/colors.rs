/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Budget remaining color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_remaining(value: f64) -> &'static str {
    if value > 0.0 {
        GREEN
    } else if value < 0.0 {
        RED
    } else {
        RESET
    }
}

/// Grey out empty values in a table cell.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}

/// Completed rows render green, pending ones yellow.
pub fn colorize_done(value: &str, done: bool) -> String {
    if done {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{YELLOW}{value}{RESET}")
    }
}
