use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::question::Question;

/// A recruiter-authored test tied to a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: AssessmentCategory,
    pub duration_minutes: u32,
    /// 0–100. A candidate passes at or above this percentage.
    pub passing_score_percent: u8,
    /// Presentation order.
    pub questions: Vec<Question>,
    pub job_id: Uuid,
    pub job_title: String,
    pub company: String,
    pub owner_id: Uuid,
    pub status: AssessmentStatus,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl Assessment {
    /// Total achievable points.
    pub fn max_score(&self) -> u32 {
        self.questions.iter().map(|q| q.points).sum()
    }

    pub fn duration_seconds(&self) -> u64 {
        u64::from(self.duration_minutes) * 60
    }

    pub fn question(&self, id: Uuid) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn is_active(&self) -> bool {
        self.status == AssessmentStatus::Active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentStatus {
    Draft,
    Active,
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssessmentStatus::Draft => f.write_str("draft"),
            AssessmentStatus::Active => f.write_str("active"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentCategory {
    #[default]
    Technical,
    Behavioral,
    Cognitive,
    Personality,
}

impl fmt::Display for AssessmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AssessmentCategory::Technical => "technical",
            AssessmentCategory::Behavioral => "behavioral",
            AssessmentCategory::Cognitive => "cognitive",
            AssessmentCategory::Personality => "personality",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for AssessmentCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "technical" => Ok(AssessmentCategory::Technical),
            "behavioral" => Ok(AssessmentCategory::Behavioral),
            "cognitive" => Ok(AssessmentCategory::Cognitive),
            "personality" => Ok(AssessmentCategory::Personality),
            other => Err(CoreError::UnknownVariant {
                kind: "assessment category",
                value: other.to_string(),
            }),
        }
    }
}
