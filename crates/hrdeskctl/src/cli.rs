//! CLI - Command-line argument parsing
//!
//! Keeps argument parsing separate from execution.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// HR Desk assistant CLI
#[derive(Parser, Debug)]
#[command(name = "hrdeskctl")]
#[command(about = "HR Desk assistant - ask questions about your HR data", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (overrides $HRDESK_CONFIG and the default location)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL (overrides the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand (if not provided, starts the interactive loop)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Ask one question and print the answer
    Ask {
        /// The question, e.g. "who is absent today"
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Show how a question would be routed without calling the backend
    Route {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// Start the interactive loop
    Repl,

    /// Print the effective configuration as TOML
    Config,
}

/// Join positional words into one query string
pub fn join_query(words: &[String]) -> String {
    words.join(" ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ask() {
        let cli = Cli::parse_from(["hrdeskctl", "ask", "who", "is", "absent", "today"]);
        match cli.command {
            Some(Commands::Ask { query }) => assert_eq!(join_query(&query), "who is absent today"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_route_json_with_globals() {
        let cli = Cli::parse_from([
            "hrdeskctl",
            "route",
            "--json",
            "show quick stats",
            "--base-url",
            "http://hr.local/api",
            "-vv",
        ]);
        assert_eq!(cli.base_url.as_deref(), Some("http://hr.local/api"));
        assert_eq!(cli.verbose, 2);
        assert_eq!(
            cli.command,
            Some(Commands::Route {
                query: vec!["show quick stats".to_string()],
                json: true,
            })
        );
    }

    #[test]
    fn test_no_subcommand_means_repl() {
        let cli = Cli::parse_from(["hrdeskctl"]);
        assert!(cli.command.is_none());
    }
}
