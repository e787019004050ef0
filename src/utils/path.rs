//! Path utilities: expand ~, resolve relative output paths.

use std::env;
use std::io;
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Expand `~/` and anchor relative paths at the current directory.
pub fn resolve_output(path: &str) -> io::Result<PathBuf> {
    let p = expand_tilde(path);
    if p.is_absolute() {
        Ok(p)
    } else {
        Ok(env::current_dir()?.join(p))
    }
}
