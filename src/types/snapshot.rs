use crate::error::{RepocheckError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoIdentity {
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl RepoIdentity {
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    pub fn validate(&self) -> Result<()> {
        for (field, value) in [("owner", &self.owner), ("name", &self.name)] {
            if value.trim().is_empty() {
                return Err(RepocheckError::InvalidSnapshot(format!(
                    "repository {field} is missing"
                )));
            }
            if value.contains('/') {
                return Err(RepocheckError::InvalidSnapshot(format!(
                    "repository {field} must not contain '/': {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Already-fetched facts about one repository.
///
/// Every field except the identity is defaulted when absent from the input
/// document; a missing signal fails the checks that depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySnapshot {
    #[serde(flatten)]
    pub identity: RepoIdentity,
    #[serde(default)]
    pub primary_language: Option<String>,
    #[serde(default)]
    pub license_id: Option<String>,
    #[serde(default)]
    pub star_count: u64,
    #[serde(default)]
    pub size_kb: u64,
    #[serde(default)]
    pub contributor_count: u64,
    #[serde(default)]
    pub file_count: u64,
    #[serde(default)]
    pub directory_count: u64,
    #[serde(default)]
    pub has_readme: bool,
    #[serde(default)]
    pub has_tests_dir_or_files: bool,
    #[serde(default)]
    pub has_lint_config: bool,
    #[serde(default)]
    pub last_activity_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub commit_count: u64,
    #[serde(default)]
    pub network_dependency_count: u64,
    #[serde(default)]
    pub readme_has_setup_instructions: Option<bool>,
    #[serde(default)]
    pub readme_excerpt: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub is_fork: bool,
    #[serde(default)]
    pub parent_star_count: Option<u64>,
    #[serde(flatten, skip_serializing)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl RepositorySnapshot {
    /// Stars used for community signals. Forks are judged by their parent.
    pub fn unknown_fields(&self) -> impl Iterator<Item = &str> {
        self.extra.keys().map(String::as_str)
    }

    pub fn effective_stars(&self) -> u64 {
        if self.is_fork {
            self.parent_star_count.unwrap_or(self.star_count)
        } else {
            self.star_count
        }
    }
}
