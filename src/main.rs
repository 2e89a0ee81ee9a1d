mod cli;
mod server;
mod tools;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "journey", version, about = "Plans, priorities, and keywords from journal entries")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse one entry and print the extraction result as JSON
    Parse {
        /// Entry text. Reads --file or stdin when omitted.
        text: Option<String>,
        /// Read the entry from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Reference date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// Resolve a date phrase such as "next week" or "on friday"
    Resolve {
        phrase: String,
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Build a per-day agenda from a JSON array of entries
    Agenda {
        file: PathBuf,
        /// Date for entries that carry none; defaults to today
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Print the effective cue vocabulary as TOML
    Vocab {
        /// Show a single built-in locale instead of the configured merge
        #[arg(long)]
        locale: Option<String>,
    },
    /// Start the MCP server (stdio transport)
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level)
    let config = journey::config::JourneyConfig::load()?;

    // Log to stderr so stdout stays clean for JSON output and MCP JSON-RPC.
    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Parse {
            text,
            file,
            today,
            compact,
        } => cli::parse::parse(&config, text, file.as_deref(), today, compact)?,
        Command::Resolve { phrase, today } => cli::resolve::resolve(&config, &phrase, today)?,
        Command::Agenda { file, today } => cli::agenda::agenda(&config, &file, today)?,
        Command::Vocab { locale } => cli::vocab::vocab(&config, locale.as_deref())?,
        Command::Serve => server::serve_stdio(config).await?,
    }

    Ok(())
}
