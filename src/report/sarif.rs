use crate::analyze::checks::CHECKS;
use crate::types::report::EvaluationReport;
use crate::types::scoring::Severity;
use serde_json::json;

pub fn to_sarif(reports: &[EvaluationReport]) -> Result<String, serde_json::Error> {
    let rules: Vec<_> = CHECKS
        .iter()
        .map(|check| {
            json!({
                "id": check.name,
                "shortDescription": { "text": check.description },
            })
        })
        .collect();

    let results: Vec<_> = reports
        .iter()
        .flat_map(|report| {
            report.failed_checks.iter().map(move |check| {
                json!({
                    "ruleId": check.name,
                    "level": match check.severity {
                        Severity::Critical => "error",
                        Severity::Warning => "warning",
                    },
                    "message": { "text": check.message },
                    "locations": [{
                        "physicalLocation": {
                            "artifactLocation": { "uri": report.repository.url }
                        }
                    }],
                })
            })
        })
        .collect();

    let sarif = json!({
        "version": "2.1.0",
        "runs": [{
            "tool": {
                "driver": {
                    "name": "repocheck",
                    "version": env!("CARGO_PKG_VERSION"),
                    "rules": rules
                }
            },
            "results": results
        }]
    });

    serde_json::to_string_pretty(&sarif)
}
