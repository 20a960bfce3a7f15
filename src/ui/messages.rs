//! Colored status lines for the terminal.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";

fn paint(color: &str, tag: &str, msg: &dyn fmt::Display) -> String {
    format!("{color}{BOLD}{tag}{RESET} {msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", paint(BLUE, "•", &msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", paint(GREEN, "✔", &msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", paint(YELLOW, "!", &msg));
}

/// Goes to stderr, unlike the other helpers.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", paint(RED, "✘", &msg));
}

/// Section header: bold title over a rule of the same width.
pub fn header<T: fmt::Display>(msg: T) {
    let title = msg.to_string();
    println!("{BOLD}{title}{RESET}");
    println!("{}", "─".repeat(title.chars().count()));
}
