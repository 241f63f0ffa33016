use crate::types::config::Thresholds;
use crate::types::snapshot::RepositorySnapshot;

/// Per-signal breakdown of the low-effort heuristic. Each signal is in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualitySignals {
    pub description: f64,
    pub readme: f64,
    pub commit_history: f64,
    pub contributors: f64,
}

impl QualitySignals {
    pub fn score(&self) -> f64 {
        (self.description + self.readme + self.commit_history + self.contributors) / 4.0
    }

    pub fn red_flags(&self, thresholds: &Thresholds) -> Vec<String> {
        let mut flags = Vec::new();
        if self.description < 1.0 {
            flags.push(format!(
                "description shorter than {} words",
                thresholds.min_description_words
            ));
        }
        if self.readme < 1.0 {
            flags.push("no README".to_string());
        }
        if self.commit_history < 1.0 {
            flags.push(format!("fewer than {} commits", thresholds.min_commits));
        }
        if self.contributors == 0.0 {
            flags.push("single contributor".to_string());
        } else if self.contributors < 1.0 {
            flags.push(format!(
                "fewer than {} contributors",
                thresholds.min_contributors
            ));
        }
        flags
    }
}

pub fn quality_signals(snapshot: &RepositorySnapshot, thresholds: &Thresholds) -> QualitySignals {
    let word_count = snapshot
        .description
        .as_deref()
        .map(|description| description.split_whitespace().count())
        .unwrap_or(0);

    let contributors = if snapshot.contributor_count >= thresholds.min_contributors {
        1.0
    } else if snapshot.contributor_count >= 2 {
        0.5
    } else {
        0.0
    };

    QualitySignals {
        description: flag(word_count >= thresholds.min_description_words),
        readme: flag(snapshot.has_readme),
        commit_history: flag(snapshot.commit_count >= thresholds.min_commits),
        contributors,
    }
}

fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}
