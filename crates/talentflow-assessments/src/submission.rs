use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use talentflow_core::models::application::ApplicationStatus;
use talentflow_core::models::assessment::Assessment;
use talentflow_storage::applications::{
    ApplicationFilter, ApplicationPatch, ApplicationRepository,
};

use crate::error::RunnerError;
use crate::scoring::ScoreCard;
use crate::session::{RunSession, SubmitOutcome, SubmitReason};

/// What happened to the score after the run finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "outcome", rename_all = "snake_case")]
#[ts(export)]
pub enum Recording {
    Recorded { application_id: Uuid },
    /// The candidate never applied to the assessment's job.
    NoApplication,
    /// The write failed. Not retried.
    Failed { error: String },
    /// A previous submit already completed the run; nothing was written.
    AlreadySubmitted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmissionReport {
    pub candidate_id: Uuid,
    pub score: ScoreCard,
    pub reason: SubmitReason,
    pub recording: Recording,
}

/// Writes finished runs onto the candidate's application.
#[derive(Clone)]
pub struct ResultRecorder {
    applications: ApplicationRepository,
}

impl ResultRecorder {
    pub fn new(applications: ApplicationRepository) -> Self {
        Self { applications }
    }

    /// Submit the session and record the score.
    ///
    /// A second submit on a completed session returns the existing score
    /// and writes nothing.
    pub async fn submit(
        &self,
        session: &mut RunSession,
        candidate_id: Uuid,
    ) -> Result<SubmissionReport, RunnerError> {
        match session.submit()? {
            SubmitOutcome::Completed(score) => {
                let report = self
                    .finish(session.assessment(), candidate_id, score, SubmitReason::Manual)
                    .await;
                Ok(report)
            }
            SubmitOutcome::AlreadyCompleted(score) => {
                tracing::debug!(
                    assessment_id = %score.assessment_id,
                    "submit on completed run ignored"
                );
                Ok(SubmissionReport {
                    candidate_id,
                    score,
                    reason: SubmitReason::Manual,
                    recording: Recording::AlreadySubmitted,
                })
            }
        }
    }

    /// Record a score that a session just produced.
    ///
    /// Lookup and write failures are logged and reported, never returned as
    /// errors: the candidate sees their result either way.
    pub async fn finish(
        &self,
        assessment: &Assessment,
        candidate_id: Uuid,
        score: ScoreCard,
        reason: SubmitReason,
    ) -> SubmissionReport {
        let recording = self.record(assessment, candidate_id, &score).await;
        SubmissionReport {
            candidate_id,
            score,
            reason,
            recording,
        }
    }

    async fn record(
        &self,
        assessment: &Assessment,
        candidate_id: Uuid,
        score: &ScoreCard,
    ) -> Recording {
        let filter = ApplicationFilter {
            candidate_id: Some(candidate_id),
            job_id: Some(assessment.job_id),
        };

        let application = match self.applications.list(filter).await {
            Ok(found) => found.into_iter().next(),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    assessment_id = %assessment.id,
                    "failed to look up application"
                );
                return Recording::Failed {
                    error: e.to_string(),
                };
            }
        };

        let Some(application) = application else {
            tracing::warn!(
                assessment_id = %assessment.id,
                candidate_id = %candidate_id,
                job_id = %assessment.job_id,
                "no application for this job, score not recorded"
            );
            return Recording::NoApplication;
        };

        let patch = ApplicationPatch {
            status: Some(ApplicationStatus::after_assessment(score.passed)),
            assessment_completed: Some(true),
            assessment_score: Some(score.percent),
            cover_letter: None,
        };

        match self.applications.update(application.id, patch).await {
            Ok(updated) => {
                tracing::info!(
                    application_id = %updated.id,
                    percent = score.percent,
                    status = %updated.status,
                    "assessment result recorded"
                );
                Recording::Recorded {
                    application_id: updated.id,
                }
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    application_id = %application.id,
                    "failed to record assessment result"
                );
                Recording::Failed {
                    error: e.to_string(),
                }
            }
        }
    }
}
