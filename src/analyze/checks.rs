use super::metrics::DerivedMetrics;
use crate::types::config::Thresholds;
use crate::types::scoring::{Score, Severity};
use crate::types::snapshot::RepositorySnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub passed: bool,
    pub message: String,
}

impl CheckOutcome {
    fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }

    fn from_bool(passed: bool, pass: impl Into<String>, fail: impl Into<String>) -> Self {
        if passed {
            Self::pass(pass)
        } else {
            Self::fail(fail)
        }
    }
}

pub type Predicate = fn(&RepositorySnapshot, &DerivedMetrics, &Thresholds) -> CheckOutcome;

/// One rubric rule. Predicates are pure and never fail; a missing signal is a
/// failing outcome.
#[derive(Debug)]
pub struct Check {
    pub name: &'static str,
    pub severity: Severity,
    pub description: &'static str,
    pub predicate: Predicate,
}

impl Check {
    pub const fn points(&self) -> Score {
        self.severity.points()
    }

    pub fn run(
        &self,
        snapshot: &RepositorySnapshot,
        metrics: &DerivedMetrics,
        thresholds: &Thresholds,
    ) -> CheckOutcome {
        (self.predicate)(snapshot, metrics, thresholds)
    }
}

macro_rules! check_def {
    ($name:expr, $severity:ident, $description:expr, $predicate:expr) => {
        Check {
            name: $name,
            severity: Severity::$severity,
            description: $description,
            predicate: $predicate,
        }
    };
}

/// The rubric, in evaluation order.
pub const CHECKS: &[Check] = &[
    check_def!(
        "git_repository",
        Critical,
        "Snapshot describes a reachable git repository",
        git_repository
    ),
    check_def!(
        "primary_language",
        Critical,
        "A primary language is detected",
        primary_language
    ),
    check_def!(
        "open_license",
        Critical,
        "An OSI-approved or FSF-libre license is declared",
        open_license
    ),
    check_def!(
        "multiple_contributors",
        Critical,
        "At least the minimum number of contributors",
        multiple_contributors
    ),
    check_def!(
        "build_instructions",
        Critical,
        "README explains how to set up or build the project",
        build_instructions
    ),
    check_def!(
        "project_complexity",
        Critical,
        "Enough files and directories to be non-trivial",
        project_complexity
    ),
    check_def!(
        "quality_project",
        Critical,
        "Metadata suggests deliberate engineering rather than a low-effort dump",
        quality_project
    ),
    check_def!(
        "repository_size",
        Critical,
        "Repository stays under the size limit",
        repository_size
    ),
    check_def!(
        "testing_practices",
        Warning,
        "Test files or directories are present",
        testing_practices
    ),
    check_def!(
        "recent_activity",
        Warning,
        "Activity within the recency window",
        recent_activity
    ),
    check_def!(
        "code_quality",
        Warning,
        "Lint configuration or community validation",
        code_quality
    ),
    check_def!(
        "network_usage",
        Warning,
        "Minimal network surface",
        network_usage
    ),
];

pub fn find(name: &str) -> Option<&'static Check> {
    CHECKS.iter().find(|check| check.name == name)
}

pub fn max_score() -> Score {
    CHECKS.iter().map(Check::points).sum()
}

fn git_repository(
    snapshot: &RepositorySnapshot,
    _metrics: &DerivedMetrics,
    _thresholds: &Thresholds,
) -> CheckOutcome {
    CheckOutcome::from_bool(
        !snapshot.identity.url.trim().is_empty(),
        "valid git repository",
        format!(
            "no repository URL recorded for {}",
            snapshot.identity.full_name()
        ),
    )
}

fn primary_language(
    snapshot: &RepositorySnapshot,
    _metrics: &DerivedMetrics,
    _thresholds: &Thresholds,
) -> CheckOutcome {
    match snapshot
        .primary_language
        .as_deref()
        .map(str::trim)
        .filter(|language| !language.is_empty())
    {
        Some(language) => CheckOutcome::pass(format!("primary language is {language}")),
        None => CheckOutcome::fail("no primary language detected"),
    }
}

fn open_license(
    snapshot: &RepositorySnapshot,
    metrics: &DerivedMetrics,
    _thresholds: &Thresholds,
) -> CheckOutcome {
    match snapshot.license_id.as_deref() {
        None => CheckOutcome::fail("no license detected; add an open-source LICENSE file"),
        Some(id) if metrics.open_license => CheckOutcome::pass(format!("licensed under {id}")),
        Some(id) => CheckOutcome::fail(format!(
            "license '{id}' is not a recognized open-source license"
        )),
    }
}

fn multiple_contributors(
    snapshot: &RepositorySnapshot,
    metrics: &DerivedMetrics,
    thresholds: &Thresholds,
) -> CheckOutcome {
    let count = snapshot.contributor_count;
    let noun = if count == 1 { "contributor" } else { "contributors" };
    CheckOutcome::from_bool(
        metrics.is_multi_contributor,
        format!("has {count} {noun}"),
        format!(
            "only {count} {noun} found, minimum {} required",
            thresholds.min_contributors
        ),
    )
}

fn build_instructions(
    snapshot: &RepositorySnapshot,
    metrics: &DerivedMetrics,
    _thresholds: &Thresholds,
) -> CheckOutcome {
    if metrics.build_instructions_ok {
        CheckOutcome::pass("README includes setup instructions")
    } else if !snapshot.has_readme {
        CheckOutcome::fail("no README found; add one with setup or installation steps")
    } else {
        CheckOutcome::fail("README does not explain how to install, build or set up the project")
    }
}

fn project_complexity(
    snapshot: &RepositorySnapshot,
    metrics: &DerivedMetrics,
    thresholds: &Thresholds,
) -> CheckOutcome {
    CheckOutcome::from_bool(
        metrics.complexity_ok,
        format!(
            "sufficient complexity ({} files, {} directories)",
            snapshot.file_count, snapshot.directory_count
        ),
        format!(
            "too simple: {} files, {} directories (need {}+ files, {}+ directories)",
            snapshot.file_count,
            snapshot.directory_count,
            thresholds.min_files,
            thresholds.min_directories
        ),
    )
}

fn quality_project(
    _snapshot: &RepositorySnapshot,
    metrics: &DerivedMetrics,
    thresholds: &Thresholds,
) -> CheckOutcome {
    let flags = metrics.quality.red_flags(thresholds);
    if metrics.quality_score >= thresholds.quality_threshold {
        if flags.is_empty() {
            CheckOutcome::pass("appears deliberately engineered")
        } else {
            CheckOutcome::pass(format!("some concerns: {}", flags.join(", ")))
        }
    } else {
        CheckOutcome::fail(format!(
            "appears low-effort (quality score {:.3}, minimum {:.3}): {}",
            metrics.quality_score,
            thresholds.quality_threshold,
            flags.join(", ")
        ))
    }
}

fn repository_size(
    snapshot: &RepositorySnapshot,
    metrics: &DerivedMetrics,
    thresholds: &Thresholds,
) -> CheckOutcome {
    let size_mb = snapshot.size_kb as f64 / 1024.0;
    CheckOutcome::from_bool(
        metrics.size_ok,
        format!("reasonable size ({size_mb:.1} MB)"),
        format!(
            "too large: {size_mb:.1} MB (max {} MB)",
            thresholds.max_size_mb
        ),
    )
}

fn testing_practices(
    snapshot: &RepositorySnapshot,
    _metrics: &DerivedMetrics,
    _thresholds: &Thresholds,
) -> CheckOutcome {
    CheckOutcome::from_bool(
        snapshot.has_tests_dir_or_files,
        "testing files or directories found",
        "no testing files or directories detected",
    )
}

fn recent_activity(
    _snapshot: &RepositorySnapshot,
    metrics: &DerivedMetrics,
    thresholds: &Thresholds,
) -> CheckOutcome {
    let window = thresholds.activity_days;
    match metrics.activity_age_days {
        None => CheckOutcome::fail("no recorded commit or push activity"),
        Some(age) => CheckOutcome::from_bool(
            metrics.recent_activity,
            format!("active in the last {window} days"),
            format!("no activity in the last {window} days (last activity {age} days ago)"),
        ),
    }
}

fn code_quality(
    snapshot: &RepositorySnapshot,
    metrics: &DerivedMetrics,
    thresholds: &Thresholds,
) -> CheckOutcome {
    let stars = snapshot.effective_stars();
    if !metrics.code_quality_ok {
        CheckOutcome::fail(format!(
            "no lint configuration and limited community validation ({stars} stars, {} needed)",
            thresholds.min_stars_for_quality
        ))
    } else if snapshot.has_lint_config {
        CheckOutcome::pass("lint or formatter configuration found")
    } else {
        CheckOutcome::pass(format!("high community validation ({stars} stars)"))
    }
}

fn network_usage(
    snapshot: &RepositorySnapshot,
    _metrics: &DerivedMetrics,
    thresholds: &Thresholds,
) -> CheckOutcome {
    let count = snapshot.network_dependency_count;
    CheckOutcome::from_bool(
        count <= thresholds.max_network_indicators,
        "no extensive network usage detected",
        format!(
            "may require extensive network access ({count} network indicators, at most {} allowed)",
            thresholds.max_network_indicators
        ),
    )
}
