use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use talentflow_core::models::assessment::Assessment;
use talentflow_storage::applications::{ApplicationFilter, ApplicationRepository};
use talentflow_storage::assessments::{AssessmentFilter, AssessmentRepository};
use talentflow_storage::error::StorageError;

use crate::error::AssessmentError;
use crate::session::RunSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "state", rename_all = "snake_case")]
#[ts(export)]
pub enum AssignmentState {
    Pending,
    Completed { score: Option<u8> },
}

/// An assessment as the candidate portal lists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssignedAssessment {
    pub assessment_id: Uuid,
    pub title: String,
    pub description: String,
    pub job_id: Uuid,
    pub job_title: String,
    pub company: String,
    pub application_id: Uuid,
    pub assigned_at: jiff::Timestamp,
    pub duration_minutes: u32,
    pub question_count: usize,
    pub max_score: u32,
    pub passing_score_percent: u8,
    pub state: AssignmentState,
}

/// The candidate's view of assessments: published ones for jobs they
/// applied to.
#[derive(Clone)]
pub struct Catalog {
    assessments: AssessmentRepository,
    applications: ApplicationRepository,
}

impl Catalog {
    pub fn new(assessments: AssessmentRepository, applications: ApplicationRepository) -> Self {
        Self {
            assessments,
            applications,
        }
    }

    pub async fn available_for(
        &self,
        candidate_id: Uuid,
    ) -> Result<Vec<AssignedAssessment>, StorageError> {
        let applications = self
            .applications
            .list(ApplicationFilter {
                candidate_id: Some(candidate_id),
                job_id: None,
            })
            .await?;

        // First application per job wins, matching how results are recorded
        let mut by_job = HashMap::new();
        for app in &applications {
            by_job.entry(app.job_id).or_insert(app);
        }

        let assessments = self.assessments.list(AssessmentFilter::default()).await?;
        let assigned = assessments
            .into_iter()
            .filter(Assessment::is_active)
            .filter_map(|assessment| {
                let app = by_job.get(&assessment.job_id)?;
                let state = if app.assessment_completed {
                    AssignmentState::Completed {
                        score: app.assessment_score,
                    }
                } else {
                    AssignmentState::Pending
                };

                Some(AssignedAssessment {
                    assessment_id: assessment.id,
                    question_count: assessment.questions.len(),
                    max_score: assessment.max_score(),
                    title: assessment.title,
                    description: assessment.description,
                    job_id: assessment.job_id,
                    job_title: assessment.job_title,
                    company: assessment.company,
                    application_id: app.id,
                    assigned_at: app.applied_at,
                    duration_minutes: assessment.duration_minutes,
                    passing_score_percent: assessment.passing_score_percent,
                    state,
                })
            })
            .collect();

        Ok(assigned)
    }

    /// A fresh session for the candidate, starting from question 0.
    ///
    /// Refused once the candidate's application for the job records a
    /// completed assessment. A candidate with no application may still
    /// take it; the score just won't be recorded.
    pub async fn begin(
        &self,
        candidate_id: Uuid,
        assessment_id: Uuid,
    ) -> Result<RunSession, AssessmentError> {
        let assessment = self.assessments.get(assessment_id).await?;

        let applications = self
            .applications
            .list(ApplicationFilter {
                candidate_id: Some(candidate_id),
                job_id: Some(assessment.job_id),
            })
            .await?;
        if applications.first().is_some_and(|app| app.assessment_completed) {
            return Err(AssessmentError::AlreadyCompleted {
                assessment_id,
                candidate_id,
            });
        }

        Ok(RunSession::new(assessment)?)
    }
}
