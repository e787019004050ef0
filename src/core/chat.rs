use crate::errors::AppResult;
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

pub const BOT_NAME: &str = "Spark";

const COMMANDS_REPLY: &str = "Here's what I can do: log trips, summarize earnings, export your data, \
     and keep this conversation on file. Try `sparktracker --help`.";

/// Placeholder responder: answers "commands", echoes anything else.
/// Blank input gets no reply.
pub fn respond(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if input.to_lowercase().contains("commands") {
        Some(COMMANDS_REPLY.to_string())
    } else {
        Some(format!("You said: {input}"))
    }
}

/// Append one exchange to the plain-text conversation log.
pub fn log_exchange(path: &Path, input: &str, response: &str) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let ts = Local::now().format("%Y-%m-%d %H:%M:%S");

    writeln!(file, "[{ts}] You: {}", input.trim())?;
    writeln!(file, "[{ts}] {BOT_NAME}: {response}")?;
    writeln!(file)?;
    Ok(())
}
