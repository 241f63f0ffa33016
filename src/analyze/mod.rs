pub mod checks;
pub mod license;
pub mod metrics;
pub mod quality;

use crate::error::Result;
use crate::types::config::Thresholds;
use crate::types::report::{EvaluationReport, FailedCheck};
use crate::types::scoring::Score;
use crate::types::snapshot::RepositorySnapshot;
use chrono::{DateTime, Utc};
use checks::{Check, CHECKS};
use metrics::DerivedMetrics;
use tracing::{debug, info};

/// Runs the rubric against snapshots. Holds only immutable thresholds, so one
/// instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    thresholds: Thresholds,
}

impl Evaluator {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn checks(&self) -> &'static [Check] {
        CHECKS
    }

    pub fn derive(&self, snapshot: &RepositorySnapshot, now: DateTime<Utc>) -> DerivedMetrics {
        metrics::derive_with(snapshot, now, &self.thresholds)
    }

    /// Every check runs exactly once, in registry order; there is no early
    /// exit so the report carries the full failure list.
    pub fn evaluate(
        &self,
        snapshot: &RepositorySnapshot,
        now: DateTime<Utc>,
    ) -> Result<EvaluationReport> {
        snapshot.identity.validate()?;
        let full_name = snapshot.identity.full_name();
        let metrics = self.derive(snapshot, now);

        let mut score: Score = 0;
        let mut failed_checks = Vec::new();
        for check in self.checks() {
            let outcome = check.run(snapshot, &metrics, &self.thresholds);
            debug!(
                repository = %full_name,
                check = check.name,
                passed = outcome.passed,
                "{}",
                outcome.message
            );
            if outcome.passed {
                score += check.points();
            } else {
                failed_checks.push(FailedCheck {
                    name: check.name.to_string(),
                    severity: check.severity,
                    message: outcome.message,
                });
            }
        }

        let passed = score >= self.thresholds.pass_threshold;
        info!(repository = %full_name, score, passed, "evaluated repository");

        Ok(EvaluationReport::new(
            snapshot.identity.clone(),
            score,
            passed,
            failed_checks,
            now,
        ))
    }
}
