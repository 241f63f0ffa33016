mod cli;

use chrono::{DateTime, Utc};
use clap::Parser;
use repocheck::analyze::Evaluator;
use repocheck::error::RepocheckError;
use repocheck::report::{self, OutputFormat};
use repocheck::search::{self, Complexity, RankMode, SearchCriteria};
use repocheck::{config, scan};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const REJECTED: i32 = 1;
    pub const INVALID_SNAPSHOT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn parse_now(raw: Option<&str>) -> Result<DateTime<Utc>, RepocheckError> {
    match raw {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(|e| RepocheckError::InvalidArgument(format!("--now {raw}: {e}"))),
        None => Ok(Utc::now()),
    }
}

fn output_format(format: &cli::ReportFormat) -> OutputFormat {
    match format {
        cli::ReportFormat::Json => OutputFormat::Json,
        cli::ReportFormat::Md => OutputFormat::Md,
        cli::ReportFormat::Sarif => OutputFormat::Sarif,
    }
}

fn run() -> Result<i32, RepocheckError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd, cli.config.as_deref())?;
    let evaluator = Evaluator::new(loaded.rubric.clone());

    match cli.command {
        cli::Commands::Verify(cmd) => {
            let now = parse_now(cmd.now.as_deref())?;
            let snapshots = scan::load_all(&cmd.paths)?;
            if snapshots.is_empty() {
                let paths = cmd
                    .paths
                    .iter()
                    .map(|path| path.display().to_string())
                    .collect::<Vec<_>>();
                return Err(RepocheckError::InvalidArgument(format!(
                    "no snapshots found in {}",
                    paths.join(", ")
                )));
            }

            let mut reports = Vec::new();
            let mut invalid = 0usize;
            for entry in &snapshots {
                match evaluator.evaluate(&entry.snapshot, now) {
                    Ok(report) => reports.push(report),
                    Err(e) => {
                        invalid += 1;
                        eprintln!("error: {}: {}", entry.source.display(), e);
                    }
                }
            }

            if !reports.is_empty() {
                let rendered = report::render(&reports, output_format(&cmd.format))?;
                println!("{rendered}");
            }

            if invalid > 0 {
                Ok(exit_code::INVALID_SNAPSHOT)
            } else if reports.iter().all(|report| report.passed) {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::REJECTED)
            }
        }
        cli::Commands::Search(cmd) => {
            let now = parse_now(cmd.now.as_deref())?;
            let snapshots = scan::load_snapshots(&cmd.path)?
                .into_iter()
                .map(|entry| entry.snapshot)
                .collect::<Vec<_>>();

            let mut criteria = SearchCriteria::from_defaults(&loaded.search);
            if let Some(complexity) = cmd.complexity {
                criteria = criteria.with_complexity(match complexity {
                    cli::ComplexityArg::Simple => Complexity::Simple,
                    cli::ComplexityArg::Medium => Complexity::Medium,
                    cli::ComplexityArg::Complex => Complexity::Complex,
                });
            }
            if cmd.diverse {
                criteria.max_results = search::DIVERSE_PER_KIND;
            }
            criteria.language = cmd.language;
            criteria.topics = cmd.topics;
            criteria.include_failing = cmd.include_failing;
            criteria.has_tests |= cmd.has_tests;
            if let Some(min_stars) = cmd.min_stars {
                criteria.min_stars = min_stars;
            }
            if let Some(min_contributors) = cmd.min_contributors {
                criteria.min_contributors = min_contributors;
            }
            if let Some(max_results) = cmd.max_results {
                criteria.max_results = max_results;
            }

            let format = output_format(&cmd.format);
            if cmd.diverse {
                let groups = search::rank_diverse(&snapshots, &criteria, &evaluator, now);
                println!("{}", report::render_diverse(&groups, format)?);
                return Ok(exit_code::SUCCESS);
            }

            let mode = if cmd.no_verify {
                RankMode::Fast
            } else {
                RankMode::Verified
            };
            let outcome = search::rank(&snapshots, &criteria, mode, &evaluator, now);
            let rendered = report::render_search(&outcome, format)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Checks => {
            print!("{}", report::rubric_table(evaluator.checks()));
            println!(
                "\npass threshold: {}/100",
                evaluator.thresholds().pass_threshold
            );
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
