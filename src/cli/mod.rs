//! CLI module for Expert Finder
//!
//! Provides subcommands:
//! - `serve`: run the HTTP API
//! - `search`: run a single search and print the JSON result

pub mod search;
pub mod serve;

use clap::{Parser, Subcommand};

/// Expert Finder - topic search over an expert catalog with generated insights
#[derive(Parser)]
#[command(name = "expert-finder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Search the catalog once and print the response body
    Search(search::SearchArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["expert-finder", "serve"]).unwrap();
        assert!(matches!(cli.command, Command::Serve));
    }

    #[test]
    fn test_parse_search_topic() {
        let cli = Cli::try_parse_from(["expert-finder", "search", "career coaching"]).unwrap();

        match cli.command {
            Command::Search(args) => assert_eq!(args.topic, "career coaching"),
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_search_requires_topic() {
        assert!(Cli::try_parse_from(["expert-finder", "search"]).is_err());
    }
}
