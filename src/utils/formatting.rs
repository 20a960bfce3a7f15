//! Formatting utilities used for CLI and export outputs.

/// "+15" / "-20" / "0" — signed points for the activity feed.
pub fn signed_points(points: i64) -> String {
    if points > 0 {
        format!("+{}", points)
    } else {
        points.to_string()
    }
}

pub fn money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Returns a textual description and an ANSI color for a priority code.
pub fn describe_priority(code: &str) -> (String, &'static str) {
    match code.to_lowercase().as_str() {
        "low" => ("Low".into(), "\x1b[36m"),
        "medium" => ("Medium".into(), "\x1b[33m"),
        "high" => ("High".into(), "\x1b[31m"),
        other => (other.to_string(), "\x1b[0m"),
    }
}
