//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "covfilter",
    version,
    about = "Filter and classify Coverity MISRA reports",
    long_about = "covfilter — normalize Coverity JSON reports (v1-v6 and v7+) into sorted, MISRA-classified defect lists.\n\nConfiguration precedence: CLI > covfilter.toml > defaults.",
    after_help = "Examples:\n  covfilter report misra.json\n  covfilter report misra.json --all --output defects.json --totals totals.txt\n  covfilter classify \"MISRA C-2012 Rule 9.1\"",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[arg(long, global = true, help = "Enable debug diagnostics on stderr (RUST_LOG overrides)")]
    pub verbose: bool,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current covfilter version.")]
    Version,
    /// Filter a scanner report
    #[command(
        about = "Filter and classify a report",
        long_about = "Print the kept defects of a Coverity JSON report, sorted by file, line, checker and CID. Exits 1 when any defect is kept.",
        after_help = "Examples:\n  covfilter report misra.json\n  covfilter report misra.json --output json"
    )]
    Report {
        #[arg(help = "Coverity JSON report")]
        json_report: PathBuf,
        #[arg(long = "all", action = clap::ArgAction::SetTrue, help = "List all issues, including those present in the comparison snapshot")]
        show_all: bool,
        #[arg(long, help = "File to write the kept defects to, as a JSON array")]
        output: Option<PathBuf>,
        #[arg(long, help = "File to write total defects to, as flat text")]
        totals: Option<PathBuf>,
        #[arg(long, help = "File to write an HTML table of the kept defects to")]
        html: Option<PathBuf>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        format: Option<String>,
        #[arg(long, help = "Repository root used for config discovery (default: current dir)")]
        repo_root: Option<String>,
    },
    /// Classify checker names
    #[command(
        about = "Classify checker names",
        long_about = "Print the MISRA C:2012 classification (mandatory|required|advisory|unknown) of each checker name."
    )]
    Classify {
        #[arg(required = true, help = "Checker names, e.g. \"MISRA C-2012 Rule 9.1\"")]
        checkers: Vec<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        format: Option<String>,
    },
}
