use serde::{Deserialize, Serialize};

pub type Score = u32;

pub const MAX_SCORE: Score = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
}

impl Severity {
    pub const fn points(self) -> Score {
        match self {
            Self::Critical => 10,
            Self::Warning => 5,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
        }
    }
}

pub fn grade(score: Score) -> &'static str {
    if score >= 90 {
        "Excellent"
    } else if score >= 70 {
        "Good"
    } else if score >= 50 {
        "Fair"
    } else {
        "Poor"
    }
}
