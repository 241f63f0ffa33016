use crate::analyze::Evaluator;
use crate::error::RepocheckError;
use crate::types::config::SearchDefaults;
use crate::types::report::EvaluationReport;
use crate::types::scoring::Score;
use crate::types::snapshot::{RepoIdentity, RepositorySnapshot};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankMode {
    Fast,
    Verified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

pub const RECOMMENDATION_LIMIT: usize = 5;

pub const DIVERSE_PER_KIND: usize = 3;

impl Complexity {
    pub const fn min_stars(self) -> u64 {
        match self {
            Self::Simple => 10,
            Self::Medium => 50,
            Self::Complex => 200,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub language: Option<String>,
    pub topics: Vec<String>,
    pub min_stars: u64,
    pub min_contributors: u64,
    pub max_results: usize,
    pub has_tests: bool,
    pub include_failing: bool,
}

impl SearchCriteria {
    pub fn from_defaults(defaults: &SearchDefaults) -> Self {
        Self {
            language: None,
            topics: Vec::new(),
            min_stars: defaults.min_stars,
            min_contributors: defaults.min_contributors,
            max_results: defaults.max_results,
            has_tests: false,
            include_failing: false,
        }
    }

    pub fn with_complexity(mut self, complexity: Complexity) -> Self {
        self.min_stars = complexity.min_stars();
        self.has_tests = true;
        self.max_results = RECOMMENDATION_LIMIT;
        self
    }

    fn admits(&self, snapshot: &RepositorySnapshot) -> bool {
        if snapshot.star_count < self.min_stars {
            return false;
        }
        if snapshot.contributor_count < self.min_contributors {
            return false;
        }
        if self.has_tests && !snapshot.has_tests_dir_or_files {
            return false;
        }
        if let Some(language) = &self.language {
            let matches = snapshot
                .primary_language
                .as_deref()
                .map(|primary| primary.eq_ignore_ascii_case(language))
                .unwrap_or(false);
            if !matches {
                return false;
            }
        }
        self.topics.is_empty()
            || self.topics.iter().any(|wanted| {
                snapshot
                    .topics
                    .iter()
                    .any(|topic| topic.eq_ignore_ascii_case(wanted))
            })
    }
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self::from_defaults(&SearchDefaults::default())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedRepository {
    pub repository: RepoIdentity,
    pub primary_language: Option<String>,
    pub license_id: Option<String>,
    pub star_count: u64,
    pub score: Option<Score>,
    #[serde(skip)]
    pub report: Option<EvaluationReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedRepository {
    pub repository: RepoIdentity,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchOutcome {
    pub results: Vec<RankedRepository>,
    pub skipped: Vec<SkippedRepository>,
}

impl SearchOutcome {
    fn skip(&mut self, snapshot: &RepositorySnapshot, error: RepocheckError) {
        warn!(
            repository = %snapshot.identity.full_name(),
            %error,
            "skipping repository"
        );
        self.skipped.push(SkippedRepository {
            repository: snapshot.identity.clone(),
            reason: error.to_string(),
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CodebaseKind {
    Library,
    Application,
    Sdk,
    Framework,
}

impl CodebaseKind {
    pub const ALL: [Self; 4] = [
        Self::Library,
        Self::Application,
        Self::Sdk,
        Self::Framework,
    ];

    pub const fn topics(self) -> &'static [&'static str] {
        match self {
            Self::Library => &["library"],
            Self::Application => &["application", "app"],
            Self::Sdk => &["sdk"],
            Self::Framework => &["framework"],
        }
    }

    pub const fn heading(self) -> &'static str {
        match self {
            Self::Library => "Libraries",
            Self::Application => "Applications",
            Self::Sdk => "SDKs",
            Self::Framework => "Frameworks",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DiverseGroup {
    pub kind: CodebaseKind,
    #[serde(flatten)]
    pub outcome: SearchOutcome,
}

/// Filters and orders already-fetched snapshots. Per-repository evaluation
/// errors are recorded in `skipped` and never abort the batch.
pub fn rank<'a, I>(
    snapshots: I,
    criteria: &SearchCriteria,
    mode: RankMode,
    evaluator: &Evaluator,
    now: DateTime<Utc>,
) -> SearchOutcome
where
    I: IntoIterator<Item = &'a RepositorySnapshot>,
{
    let mut outcome = SearchOutcome::default();

    for snapshot in snapshots {
        if !criteria.admits(snapshot) {
            debug!(repository = %snapshot.identity.full_name(), "filtered by search criteria");
            continue;
        }

        match mode {
            RankMode::Fast => {
                if outcome.results.len() >= criteria.max_results {
                    break;
                }
                match snapshot.identity.validate() {
                    Ok(()) => outcome.results.push(ranked(snapshot, None)),
                    Err(error) => outcome.skip(snapshot, error),
                }
            }
            RankMode::Verified => match evaluator.evaluate(snapshot, now) {
                Ok(report) if report.passed || criteria.include_failing => {
                    outcome.results.push(ranked(snapshot, Some(report)));
                }
                Ok(report) => {
                    debug!(
                        repository = %snapshot.identity.full_name(),
                        score = report.score,
                        "dropped failing repository"
                    );
                }
                Err(error) => outcome.skip(snapshot, error),
            },
        }
    }

    if mode == RankMode::Verified {
        outcome.results.sort_by(|a, b| {
            b.score.cmp(&a.score).then_with(|| {
                a.repository
                    .full_name()
                    .cmp(&b.repository.full_name())
            })
        });
        outcome.results.truncate(criteria.max_results);
    }
    outcome
}

/// Verified search run once per [`CodebaseKind`], each restricted to that
/// kind's topics. `criteria.topics` is replaced; every other filter applies
/// to all groups.
pub fn rank_diverse(
    snapshots: &[RepositorySnapshot],
    criteria: &SearchCriteria,
    evaluator: &Evaluator,
    now: DateTime<Utc>,
) -> Vec<DiverseGroup> {
    CodebaseKind::ALL
        .into_iter()
        .map(|kind| {
            let group_criteria = SearchCriteria {
                topics: kind.topics().iter().map(|topic| topic.to_string()).collect(),
                ..criteria.clone()
            };
            DiverseGroup {
                kind,
                outcome: rank(snapshots, &group_criteria, RankMode::Verified, evaluator, now),
            }
        })
        .collect()
}

fn ranked(snapshot: &RepositorySnapshot, report: Option<EvaluationReport>) -> RankedRepository {
    RankedRepository {
        repository: snapshot.identity.clone(),
        primary_language: snapshot.primary_language.clone(),
        license_id: snapshot.license_id.clone(),
        star_count: snapshot.star_count,
        score: report.as_ref().map(|report| report.score),
        report,
    }
}
