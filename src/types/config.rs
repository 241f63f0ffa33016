use crate::error::RepocheckError;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    pub pass_threshold: u32,
    pub min_contributors: u64,
    pub min_files: u64,
    pub min_directories: u64,
    pub activity_days: i64,
    pub max_size_mb: u64,
    pub min_stars_for_quality: u64,
    pub max_network_indicators: u64,
    pub min_description_words: usize,
    pub min_commits: u64,
    pub quality_threshold: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            pass_threshold: 75,
            min_contributors: 3,
            min_files: 30,
            min_directories: 8,
            activity_days: 180,
            max_size_mb: 500,
            min_stars_for_quality: 50,
            max_network_indicators: 2,
            min_description_words: 4,
            min_commits: 10,
            quality_threshold: 0.5,
        }
    }
}

impl Thresholds {
    pub fn max_size_kb(&self) -> u64 {
        self.max_size_mb.saturating_mul(1024)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchDefaults {
    pub min_stars: u64,
    pub min_contributors: u64,
    pub max_results: usize,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            min_stars: 10,
            min_contributors: 2,
            max_results: 10,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RepocheckConfig {
    pub rubric: Thresholds,
    pub search: SearchDefaults,
}

impl RepocheckConfig {
    pub fn validate(&self) -> Result<(), RepocheckError> {
        let rubric = &self.rubric;
        if rubric.pass_threshold > 100 {
            return Err(RepocheckError::ConfigParse(format!(
                "rubric.pass_threshold must be at most 100 (found {})",
                rubric.pass_threshold
            )));
        }
        if !(0.0..=1.0).contains(&rubric.quality_threshold) {
            return Err(RepocheckError::ConfigParse(format!(
                "rubric.quality_threshold must be between 0.0 and 1.0 (found {})",
                rubric.quality_threshold
            )));
        }
        if rubric.min_contributors == 0 {
            return Err(RepocheckError::ConfigParse(
                "rubric.min_contributors must be at least 1".to_string(),
            ));
        }
        if rubric.activity_days <= 0 {
            return Err(RepocheckError::ConfigParse(
                "rubric.activity_days must be positive".to_string(),
            ));
        }
        if self.search.max_results == 0 {
            return Err(RepocheckError::ConfigParse(
                "search.max_results must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
