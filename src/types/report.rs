use crate::types::scoring::{grade, Score, Severity};
use crate::types::snapshot::RepoIdentity;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedCheck {
    pub name: String,
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationReport {
    pub repository: RepoIdentity,
    pub score: Score,
    pub passed: bool,
    pub summary: String,
    pub failed_checks: Vec<FailedCheck>,
    pub warnings: Vec<FailedCheck>,
    pub evaluated_at: DateTime<Utc>,
}

impl EvaluationReport {
    pub fn new(
        repository: RepoIdentity,
        score: Score,
        passed: bool,
        failed_checks: Vec<FailedCheck>,
        evaluated_at: DateTime<Utc>,
    ) -> Self {
        let warnings = failed_checks
            .iter()
            .filter(|check| check.severity == Severity::Warning)
            .cloned()
            .collect::<Vec<_>>();
        let summary = summarize(score, passed, &failed_checks, warnings.len());
        Self {
            repository,
            score,
            passed,
            summary,
            failed_checks,
            warnings,
            evaluated_at,
        }
    }

    pub fn critical_failures(&self) -> impl Iterator<Item = &FailedCheck> {
        self.failed_checks
            .iter()
            .filter(|check| check.severity == Severity::Critical)
    }
}

fn summarize(score: Score, passed: bool, failed: &[FailedCheck], warning_count: usize) -> String {
    let critical_count = failed.len() - warning_count;
    let mut summary = format!("{} quality (score: {score}/100).", grade(score));
    if critical_count > 0 {
        summary.push_str(&format!(
            " Failed {critical_count} critical requirement(s)."
        ));
    }
    if warning_count > 0 {
        summary.push_str(&format!(" {warning_count} warning(s)."));
    }
    if passed {
        summary.push_str(" Repository meets minimum requirements.");
    } else {
        summary.push_str(" Repository does not meet minimum requirements.");
    }
    summary
}
