use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::chat::{BOT_NAME, log_exchange, respond};
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use ansi_term::Colour;
use std::io::{self, BufRead, Write};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Chat { message, log } = cmd {
        let log_path = expand_tilde(log.as_deref().unwrap_or(&cfg.chat_log));

        match message {
            Some(m) => exchange(m, &log_path)?,
            None => interactive(&log_path)?,
        }
    }
    Ok(())
}

/// Answer one line; blank input is ignored and not logged.
fn exchange(input: &str, log_path: &Path) -> AppResult<()> {
    if let Some(reply) = respond(input) {
        println!("{}: {reply}", Colour::Cyan.bold().paint(BOT_NAME));
        log_exchange(log_path, input, &reply)?;
    }
    Ok(())
}

fn interactive(log_path: &Path) -> AppResult<()> {
    println!(
        "Chatting with {}. Type 'exit' to quit.",
        Colour::Cyan.bold().paint(BOT_NAME)
    );

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        if matches!(line.trim().to_lowercase().as_str(), "exit" | "quit") {
            break;
        }

        exchange(&line, log_path)?;
    }

    Ok(())
}
