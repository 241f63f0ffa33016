use crate::search::{DiverseGroup, SearchOutcome};
use crate::types::report::EvaluationReport;

pub fn to_markdown(report: &EvaluationReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", report.repository.full_name()));
    if !report.repository.url.is_empty() {
        output.push_str(&format!("{}\n\n", report.repository.url));
    }
    output.push_str(&format!(
        "Verdict: {} (score {}/100)\n\n",
        if report.passed { "PASSED" } else { "FAILED" },
        report.score
    ));
    output.push_str(&format!("{}\n\n", report.summary));

    output.push_str("## Missing\n\n");
    let mut critical = report.critical_failures().peekable();
    if critical.peek().is_none() {
        output.push_str("- none\n\n");
    } else {
        for check in critical {
            output.push_str(&format!("- {}: {}\n", check.name, check.message));
        }
        output.push('\n');
    }

    output.push_str("## Warnings\n\n");
    if report.warnings.is_empty() {
        output.push_str("- none\n");
    } else {
        for check in &report.warnings {
            output.push_str(&format!("- {}: {}\n", check.name, check.message));
        }
    }

    output
}

pub fn search_to_markdown(outcome: &SearchOutcome) -> String {
    let mut output = String::new();
    output.push_str("# Search Results\n\n");
    push_outcome(&mut output, outcome, "##");
    output
}

pub fn diverse_to_markdown(groups: &[DiverseGroup]) -> String {
    let mut output = String::new();
    output.push_str("# Diverse Codebases\n");
    for group in groups {
        output.push_str(&format!("\n## {}\n\n", group.kind.heading()));
        push_outcome(&mut output, &group.outcome, "###");
    }
    output
}

fn push_outcome(output: &mut String, outcome: &SearchOutcome, heading: &str) {
    if outcome.results.is_empty() {
        output.push_str("No repositories found matching criteria.\n");
    } else {
        output.push_str("| Repository | Language | Stars | Score | License |\n");
        output.push_str("|---|---|---:|---:|---|\n");
        for result in &outcome.results {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                result.repository.full_name(),
                result.primary_language.as_deref().unwrap_or("Unknown"),
                result.star_count,
                result
                    .score
                    .map(|score| score.to_string())
                    .unwrap_or_else(|| "N/A".to_string()),
                result.license_id.as_deref().unwrap_or("None")
            ));
        }
    }

    if !outcome.skipped.is_empty() {
        output.push_str(&format!("\n{heading} Skipped\n\n"));
        for skipped in &outcome.skipped {
            output.push_str(&format!(
                "- {}: {}\n",
                skipped.repository.full_name(),
                skipped.reason
            ));
        }
    }
}
