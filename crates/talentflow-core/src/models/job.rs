use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A job posting. Owned by the recruiter who posted it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub owner_id: Uuid,
    pub status: JobStatus,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum JobStatus {
    Active,
    Draft,
    Archived,
}
