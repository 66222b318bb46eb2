//! CLI argument definitions for newsdesk.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `sources` | List available news sources |
//! | `headlines` | Fetch top headlines for one source |
//!
//! # Global options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--timeout-ms` | `3000` | Request timeout in ms |
//!
//! The upstream API key is read from the `NEWSDESK_API_KEY` environment
//! variable; without it every command fails with the absent-url error.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Newsdesk - fetch news sources and headlines from NewsAPI.
#[derive(Debug, Parser)]
#[command(
    name = "newsdesk",
    version,
    about = "Fetch news sources and headlines from NewsAPI"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = 3000)]
    pub timeout_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single JSON object output.
    Json,
    /// ASCII table format for terminal display.
    Table,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the news sources available upstream.
    ///
    /// # Examples
    ///
    ///   newsdesk sources
    ///   newsdesk sources --format table
    Sources,

    /// Fetch top headlines for one source.
    ///
    /// Returns display-ready articles: absent descriptions and authors
    /// come back as empty strings.
    ///
    /// # Examples
    ///
    ///   newsdesk headlines abc-news
    ///   newsdesk headlines bbc-news --pretty
    Headlines(HeadlinesArgs),
}

/// Arguments for the `headlines` command.
#[derive(Debug, Args)]
pub struct HeadlinesArgs {
    /// Source identifier as listed by `newsdesk sources` (e.g., abc-news).
    pub source_id: String,
}
