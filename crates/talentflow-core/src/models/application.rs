use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A candidate's application to a job, carrying the assessment outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Application {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub candidate_name: String,
    pub job_id: Uuid,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub assessment_completed: bool,
    /// Percentage 0–100, present once the assessment is completed.
    #[serde(default)]
    pub assessment_score: Option<u8>,
    pub applied_at: jiff::Timestamp,
    #[serde(default)]
    pub cover_letter: Option<String>,
}

/// Pipeline stage. Serialized with the display names the portals show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ApplicationStatus {
    #[serde(rename = "Applied")]
    Applied,
    #[serde(rename = "Assessment Required")]
    AssessmentRequired,
    #[serde(rename = "Assessment Completed")]
    AssessmentCompleted,
    #[serde(rename = "Assessment Failed")]
    AssessmentFailed,
    #[serde(rename = "Shortlisted")]
    Shortlisted,
    #[serde(rename = "Rejected")]
    Rejected,
    #[serde(rename = "Hired")]
    Hired,
}

impl ApplicationStatus {
    /// Stage an application moves to once its assessment is scored.
    pub fn after_assessment(passed: bool) -> Self {
        if passed {
            ApplicationStatus::AssessmentCompleted
        } else {
            ApplicationStatus::AssessmentFailed
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::AssessmentRequired => "Assessment Required",
            ApplicationStatus::AssessmentCompleted => "Assessment Completed",
            ApplicationStatus::AssessmentFailed => "Assessment Failed",
            ApplicationStatus::Shortlisted => "Shortlisted",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Hired => "Hired",
        };
        f.write_str(s)
    }
}
