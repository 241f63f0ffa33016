use crate::search::{DiverseGroup, SearchOutcome};
use crate::types::report::EvaluationReport;

pub fn to_json(reports: &[EvaluationReport]) -> Result<String, serde_json::Error> {
    match reports {
        [single] => serde_json::to_string_pretty(single),
        many => serde_json::to_string_pretty(many),
    }
}

pub fn search_to_json(outcome: &SearchOutcome) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(outcome)
}

pub fn diverse_to_json(groups: &[DiverseGroup]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::FailedCheck;
    use crate::types::scoring::Severity;
    use crate::types::snapshot::RepoIdentity;
    use chrono::{TimeZone, Utc};

    fn report(name: &str) -> EvaluationReport {
        EvaluationReport::new(
            RepoIdentity {
                owner: "org".to_string(),
                name: name.to_string(),
                url: format!("https://github.com/org/{name}"),
            },
            95,
            true,
            vec![FailedCheck {
                name: "code_quality".to_string(),
                severity: Severity::Warning,
                message: "no lint configuration".to_string(),
            }],
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn json_report_contains_score_and_severity() {
        let rendered = to_json(&[report("tool")]).expect("json should serialize");
        assert!(rendered.starts_with('{'));
        assert!(rendered.contains("\"score\": 95"));
        assert!(rendered.contains("\"severity\": \"warning\""));
        assert!(rendered.contains("\"owner\": \"org\""));
    }

    #[test]
    fn json_batch_is_an_array() {
        let rendered = to_json(&[report("a"), report("b")]).expect("json should serialize");
        assert!(rendered.starts_with('['));
    }
}
