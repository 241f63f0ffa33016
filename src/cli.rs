use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "repocheck",
    version,
    about = "Repository quality gate: scores repository snapshots against a fixed rubric"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Configuration file used instead of ./repocheck.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate snapshots and report the verdict for each repository
    Verify(VerifyCommand),
    /// Filter and rank a batch of snapshots
    Search(SearchCommand),
    /// Print the rubric
    Checks,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Sarif,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ComplexityArg {
    Simple,
    Medium,
    Complex,
}

#[derive(Args)]
pub struct VerifyCommand {
    /// Snapshot files or directories of snapshot files
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Evaluation time (RFC 3339); defaults to the current time
    #[arg(long)]
    pub now: Option<String>,
}

#[derive(Args)]
pub struct SearchCommand {
    /// Snapshot file or directory of snapshot files
    pub path: PathBuf,
    #[arg(short, long)]
    pub language: Option<String>,
    #[arg(short, long = "topic")]
    pub topics: Vec<String>,
    #[arg(long)]
    pub min_stars: Option<u64>,
    #[arg(long)]
    pub min_contributors: Option<u64>,
    #[arg(short = 'n', long)]
    pub max_results: Option<usize>,
    /// Only keep repositories with a test directory or test files
    #[arg(long)]
    pub has_tests: bool,
    /// Recommendation preset: star floor, tests required, at most 5 results
    #[arg(short, long, value_enum, conflicts_with = "min_stars")]
    pub complexity: Option<ComplexityArg>,
    /// Group verified results into libraries, applications, SDKs and frameworks
    #[arg(long, conflicts_with_all = ["topics", "no_verify"])]
    pub diverse: bool,
    /// Skip evaluation and filter on cheap fields only
    #[arg(long)]
    pub no_verify: bool,
    /// Keep repositories that fail the rubric
    #[arg(long, conflicts_with = "no_verify")]
    pub include_failing: bool,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    #[arg(long)]
    pub now: Option<String>,
}
