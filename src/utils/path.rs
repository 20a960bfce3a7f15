//! Path utilities.

use std::path::PathBuf;

/// Expand a leading `~/` to the user's home directory.
/// Used for user-supplied paths (`--db`, backup destinations).
pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}
