use super::license;
use super::quality::{quality_signals, QualitySignals};
use crate::types::config::Thresholds;
use crate::types::snapshot::RepositorySnapshot;
use chrono::{DateTime, Utc};

const SETUP_KEYWORDS: [&str; 11] = [
    "install",
    "setup",
    "set up",
    "getting started",
    "quick start",
    "quickstart",
    "build",
    "usage",
    "cargo add",
    "pip install",
    "npm install",
];

#[derive(Debug, Clone, PartialEq)]
pub struct DerivedMetrics {
    pub is_multi_contributor: bool,
    pub complexity_ok: bool,
    pub recent_activity: bool,
    pub activity_age_days: Option<i64>,
    pub size_ok: bool,
    pub quality: QualitySignals,
    pub quality_score: f64,
    pub code_quality_ok: bool,
    pub build_instructions_ok: bool,
    pub open_license: bool,
}

pub fn derive(snapshot: &RepositorySnapshot, now: DateTime<Utc>) -> DerivedMetrics {
    derive_with(snapshot, now, &Thresholds::default())
}

pub fn derive_with(
    snapshot: &RepositorySnapshot,
    now: DateTime<Utc>,
    thresholds: &Thresholds,
) -> DerivedMetrics {
    let activity_age = snapshot
        .last_activity_at
        .map(|last| now.signed_duration_since(last));
    let recent_activity = activity_age
        .map(|age| age.num_seconds() <= thresholds.activity_days.saturating_mul(86_400))
        .unwrap_or(false);

    let quality = quality_signals(snapshot, thresholds);

    DerivedMetrics {
        is_multi_contributor: snapshot.contributor_count >= thresholds.min_contributors,
        complexity_ok: snapshot.file_count >= thresholds.min_files
            && snapshot.directory_count >= thresholds.min_directories,
        recent_activity,
        activity_age_days: activity_age.map(|age| age.num_days().max(0)),
        size_ok: snapshot.size_kb <= thresholds.max_size_kb(),
        quality,
        quality_score: quality.score(),
        code_quality_ok: snapshot.has_lint_config
            || snapshot.effective_stars() >= thresholds.min_stars_for_quality,
        build_instructions_ok: snapshot.has_readme && readme_has_setup_guidance(snapshot),
        open_license: snapshot
            .license_id
            .as_deref()
            .map(license::is_open_source)
            .unwrap_or(false),
    }
}

// The collaborator's verdict wins; otherwise scan the README excerpt.
fn readme_has_setup_guidance(snapshot: &RepositorySnapshot) -> bool {
    if let Some(verdict) = snapshot.readme_has_setup_instructions {
        return verdict;
    }
    snapshot
        .readme_excerpt
        .as_deref()
        .map(|excerpt| {
            let lowered = excerpt.to_lowercase();
            SETUP_KEYWORDS
                .iter()
                .any(|keyword| lowered.contains(keyword))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn snapshot() -> RepositorySnapshot {
        RepositorySnapshot {
            license_id: Some("MIT".to_string()),
            contributor_count: 3,
            file_count: 30,
            directory_count: 8,
            size_kb: 500 * 1024,
            has_readme: true,
            readme_has_setup_instructions: Some(true),
            last_activity_at: Some(now() - Duration::days(180)),
            ..RepositorySnapshot::default()
        }
    }

    #[test]
    fn thresholds_are_inclusive() {
        let metrics = derive(&snapshot(), now());
        assert!(metrics.is_multi_contributor);
        assert!(metrics.complexity_ok);
        assert!(metrics.size_ok);
        assert!(metrics.recent_activity);
        assert!(metrics.open_license);
        assert!(metrics.build_instructions_ok);
        assert_eq!(metrics.activity_age_days, Some(180));
    }

    #[test]
    fn values_past_thresholds_fail() {
        let mut snapshot = snapshot();
        snapshot.contributor_count = 2;
        snapshot.directory_count = 7;
        snapshot.size_kb = 500 * 1024 + 1;
        snapshot.last_activity_at = Some(now() - Duration::days(181));

        let metrics = derive(&snapshot, now());
        assert!(!metrics.is_multi_contributor);
        assert!(!metrics.complexity_ok);
        assert!(!metrics.size_ok);
        assert!(!metrics.recent_activity);
    }

    #[test]
    fn missing_activity_and_empty_tree_degrade_to_false() {
        let snapshot = RepositorySnapshot {
            last_activity_at: None,
            file_count: 0,
            directory_count: 0,
            ..RepositorySnapshot::default()
        };

        let metrics = derive(&snapshot, now());
        assert!(!metrics.recent_activity);
        assert_eq!(metrics.activity_age_days, None);
        assert!(!metrics.complexity_ok);
        assert!(!metrics.open_license);
    }

    #[test]
    fn future_activity_counts_as_recent() {
        let mut snapshot = snapshot();
        snapshot.last_activity_at = Some(now() + Duration::days(2));
        let metrics = derive(&snapshot, now());
        assert!(metrics.recent_activity);
        assert_eq!(metrics.activity_age_days, Some(0));
    }

    #[test]
    fn code_quality_accepts_lint_config_or_stars() {
        let mut snapshot = snapshot();
        snapshot.star_count = 49;
        assert!(!derive(&snapshot, now()).code_quality_ok);

        snapshot.has_lint_config = true;
        assert!(derive(&snapshot, now()).code_quality_ok);

        snapshot.has_lint_config = false;
        snapshot.star_count = 50;
        assert!(derive(&snapshot, now()).code_quality_ok);
    }

    #[test]
    fn fork_code_quality_uses_parent_stars() {
        let mut snapshot = snapshot();
        snapshot.star_count = 3;
        snapshot.is_fork = true;
        snapshot.parent_star_count = Some(120);
        assert!(derive(&snapshot, now()).code_quality_ok);
    }

    #[test]
    fn readme_excerpt_scan_is_used_without_verdict() {
        let mut snapshot = snapshot();
        snapshot.readme_has_setup_instructions = None;
        snapshot.readme_excerpt = Some("## Getting Started\nRun the binary.".to_string());
        assert!(derive(&snapshot, now()).build_instructions_ok);

        snapshot.readme_excerpt = Some("A collection of notes.".to_string());
        assert!(!derive(&snapshot, now()).build_instructions_ok);

        snapshot.readme_excerpt = None;
        assert!(!derive(&snapshot, now()).build_instructions_ok);
    }

    #[test]
    fn setup_guidance_requires_readme() {
        let mut snapshot = snapshot();
        snapshot.has_readme = false;
        assert!(!derive(&snapshot, now()).build_instructions_ok);
    }

    #[test]
    fn custom_thresholds_are_honored() {
        let thresholds = Thresholds {
            min_contributors: 5,
            activity_days: 30,
            ..Thresholds::default()
        };
        let metrics = derive_with(&snapshot(), now(), &thresholds);
        assert!(!metrics.is_multi_contributor);
        assert!(!metrics.recent_activity);
    }
}
