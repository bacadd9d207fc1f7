use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "plancheck",
    version,
    about = "CI gate that fails when search query plans fall back to sequential scans"
)]
pub struct Cli {
    /// Log output: text | json (level comes from PLANCHECK_LOG)
    #[arg(long, global = true, default_value = "text")]
    pub log_format: String,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run an EXPLAIN script and fail on sequential scans
    Check(CheckArgs),
    /// Duration bucket lookups
    Duration(DurationArgs),
    /// Comma-delimited token lists
    Tokens(TokensArgs),
    Version,
}

#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// SQL script, one semicolon-terminated statement per line ending
    #[arg(long, env = "PLANCHECK_SCRIPT", default_value = "perf/search_explain.sql")]
    pub script: PathBuf,

    /// Output format: text | json
    #[arg(long, default_value = "text")]
    pub format: String,
}

#[derive(Parser, Clone)]
pub struct DurationArgs {
    #[command(subcommand)]
    pub cmd: DurationSub,
}

#[derive(Subcommand, Clone)]
pub enum DurationSub {
    /// Print the bucket for a duration in minutes
    Classify {
        #[arg(allow_negative_numbers = true)]
        minutes: i64,
    },
    /// Print the inclusive minute range of a bucket (label or slug)
    Range { bucket: String },
    /// Print every bucket with its range
    List,
}

#[derive(Parser, Clone)]
pub struct TokensArgs {
    #[command(subcommand)]
    pub cmd: TokensSub,
}

#[derive(Subcommand, Clone)]
pub enum TokensSub {
    Encode { tokens: Vec<String> },
    /// Print one decoded token per line
    Decode { text: String },
}
