use clap::Parser;
use expert_finder::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::Search(args) => cli::search::run(args).await,
    }
}
