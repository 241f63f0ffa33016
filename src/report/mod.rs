pub mod json;
pub mod md;
pub mod sarif;

use crate::analyze::checks::Check;
use crate::error::RepocheckError;
use crate::search::{DiverseGroup, SearchOutcome};
use crate::types::report::EvaluationReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
    Sarif,
}

pub fn render(
    reports: &[EvaluationReport],
    format: OutputFormat,
) -> Result<String, RepocheckError> {
    match format {
        OutputFormat::Json => json::to_json(reports).map_err(RepocheckError::Json),
        OutputFormat::Md => Ok(reports
            .iter()
            .map(md::to_markdown)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Sarif => sarif::to_sarif(reports).map_err(RepocheckError::Json),
    }
}

pub fn render_search(
    outcome: &SearchOutcome,
    format: OutputFormat,
) -> Result<String, RepocheckError> {
    match format {
        OutputFormat::Md => Ok(md::search_to_markdown(outcome)),
        // no SARIF form for search results
        OutputFormat::Json | OutputFormat::Sarif => {
            json::search_to_json(outcome).map_err(RepocheckError::Json)
        }
    }
}

pub fn render_diverse(
    groups: &[DiverseGroup],
    format: OutputFormat,
) -> Result<String, RepocheckError> {
    match format {
        OutputFormat::Md => Ok(md::diverse_to_markdown(groups)),
        OutputFormat::Json | OutputFormat::Sarif => {
            json::diverse_to_json(groups).map_err(RepocheckError::Json)
        }
    }
}

pub fn rubric_table(checks: &[Check]) -> String {
    let mut output = String::new();
    output.push_str("| Name | Severity | Points | Description |\n");
    output.push_str("|---|---|---:|---|\n");
    for check in checks {
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            check.name,
            check.severity.as_str(),
            check.points(),
            check.description
        ));
    }
    output
}
