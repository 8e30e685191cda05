//! REPL - interactive loop over one conversation session

use crate::output;
use anyhow::{Context, Result};
use hrdesk_common::ConversationService;
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// One parsed input line
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Quit,
    Help,
    History,
    Clear,
    Save(PathBuf),
    /// `/save` without a file name
    SaveMissingPath,
    Unknown(String),
    Ask(String),
    Empty,
}

pub fn parse_line(line: &str) -> ReplCommand {
    let line = line.trim();
    if line.is_empty() {
        return ReplCommand::Empty;
    }
    let Some(command) = line.strip_prefix('/') else {
        return ReplCommand::Ask(line.to_string());
    };

    let mut parts = command.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default().to_lowercase();
    let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

    match name.as_str() {
        "quit" | "exit" | "q" => ReplCommand::Quit,
        "help" | "?" => ReplCommand::Help,
        "history" => ReplCommand::History,
        "clear" => ReplCommand::Clear,
        "save" => match arg {
            Some(path) => ReplCommand::Save(PathBuf::from(path)),
            None => ReplCommand::SaveMissingPath,
        },
        _ => ReplCommand::Unknown(line.to_string()),
    }
}

/// Write the transcript as JSON
pub fn save_transcript(service: &ConversationService, path: &Path) -> Result<()> {
    let json = service.export_json()?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write transcript to {}", path.display()))?;
    Ok(())
}

fn print_help() {
    println!("Ask anything about employees, recruitment, attendance or the HR modules.");
    println!();
    println!("  {}        show this session's messages", "/history".cyan());
    println!("  {}          start a fresh session", "/clear".cyan());
    println!("  {}   write the transcript as JSON", "/save <file>".cyan());
    println!("  {}           leave", "/quit".cyan());
    println!();
}

fn print_prompt() {
    print!("{} ", "hrdesk>".bright_blue().bold());
    let _ = io::stdout().flush();
}

/// Run the loop until `/quit` or EOF
pub async fn run(mut service: ConversationService) -> Result<()> {
    println!("{}", "HR Desk assistant".bold());
    println!("{}", "Type /help for commands, /quit to leave.".dimmed());
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_prompt();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("{} {}", "Error reading input:".red(), e);
                continue;
            }
            None => break,
        };

        match parse_line(&line) {
            ReplCommand::Empty => continue,
            ReplCommand::Quit => break,
            ReplCommand::Help => print_help(),
            ReplCommand::History => output::print_history(service.history()),
            ReplCommand::Clear => {
                service.clear_history();
                println!("{}", "Session cleared.".dimmed());
            }
            ReplCommand::Save(path) => match save_transcript(&service, &path) {
                Ok(()) => println!("{} {}", "Saved to".green(), path.display()),
                Err(e) => eprintln!("{} {:#}", "Save failed:".red(), e),
            },
            ReplCommand::SaveMissingPath => eprintln!("{}", "Usage: /save <file>".yellow()),
            ReplCommand::Unknown(cmd) => {
                eprintln!("{} {} (try /help)", "Unknown command:".yellow(), cmd)
            }
            ReplCommand::Ask(query) => {
                debug!("REPL query: {:?}", query);
                let turn = service.send_message(&query).await;
                output::print_turn(&turn);
            }
        }
    }

    println!("{}", "Goodbye.".dimmed());
    Ok(())
}
