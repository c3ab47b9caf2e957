//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "idxsift",
    version,
    about = "idxsift (Rust)",
    long_about = "idxsift — a tiny CLI that sifts database index suggestions out of an analyzer report.\n\nConfiguration precedence: CLI > idxsift.toml > defaults.",
    after_help = "Examples:\n  idxsift extract\n  idxsift extract --report reports/index-analysis.txt --out reports/index-definitions.json\n  idxsift extract --output json",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current idxsift version."
    )]
    Version,
    /// Extract index suggestions from the analyzer report
    #[command(
        about = "Extract index suggestions",
        long_about = "Parse the analyzer report, filter suggestions against the configured criteria, and write the retained index definitions as a JSON array.",
        after_help = "Examples:\n  idxsift extract\n  idxsift extract --report audit/analysis.txt --output json"
    )]
    Extract {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Path to the analyzer report (default: reports/index-analysis.txt)")]
        report: Option<String>,
        #[arg(long, help = "Output file for index definitions (default: reports/index-definitions.json)")]
        out: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
