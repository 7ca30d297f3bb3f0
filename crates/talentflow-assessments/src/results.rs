use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use talentflow_core::models::application::{Application, ApplicationStatus};
use talentflow_core::models::assessment::Assessment;
use talentflow_storage::applications::{ApplicationFilter, ApplicationRepository};
use talentflow_storage::assessments::AssessmentRepository;

use crate::error::AssessmentError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ResultFilter {
    #[default]
    All,
    Passed,
    Failed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ResultSort {
    /// Highest score first.
    #[default]
    Score,
    /// Candidate name, A to Z.
    Name,
    /// Most recent application first.
    Date,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResultRow {
    pub application_id: Uuid,
    pub candidate_id: Uuid,
    pub candidate_name: String,
    pub score: u8,
    pub passed: bool,
    pub status: ApplicationStatus,
    pub applied_at: jiff::Timestamp,
}

/// Aggregates over every completed result, regardless of filter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResultStats {
    pub total: usize,
    pub passed: usize,
    pub average_score: f64,
    pub highest_score: u8,
    pub lowest_score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResultsView {
    pub assessment: Assessment,
    pub rows: Vec<ResultRow>,
    pub stats: ResultStats,
}

/// Completed results for an assessment, as its owner sees them.
pub async fn results_for(
    assessments: &AssessmentRepository,
    applications: &ApplicationRepository,
    owner_id: Uuid,
    assessment_id: Uuid,
    filter: ResultFilter,
    sort: ResultSort,
) -> Result<ResultsView, AssessmentError> {
    let assessment = assessments.get(assessment_id).await?;
    if assessment.owner_id != owner_id {
        return Err(AssessmentError::NotOwner {
            assessment_id,
            owner_id,
        });
    }

    let for_job = applications
        .list(ApplicationFilter {
            candidate_id: None,
            job_id: Some(assessment.job_id),
        })
        .await?;
    let all_rows: Vec<ResultRow> = for_job
        .iter()
        .filter_map(|app| row(app, assessment.passing_score_percent))
        .collect();

    let stats = summarize(&all_rows);
    let mut rows: Vec<ResultRow> = all_rows
        .into_iter()
        .filter(|r| match filter {
            ResultFilter::All => true,
            ResultFilter::Passed => r.passed,
            ResultFilter::Failed => !r.passed,
        })
        .collect();
    sort_rows(&mut rows, sort);

    tracing::debug!(
        assessment_id = %assessment_id,
        total = stats.total,
        shown = rows.len(),
        "results loaded"
    );
    Ok(ResultsView {
        assessment,
        rows,
        stats,
    })
}

fn row(app: &Application, passing_score_percent: u8) -> Option<ResultRow> {
    if !app.assessment_completed {
        return None;
    }
    let score = app.assessment_score?;
    Some(ResultRow {
        application_id: app.id,
        candidate_id: app.candidate_id,
        candidate_name: app.candidate_name.clone(),
        score,
        passed: score >= passing_score_percent,
        status: app.status,
        applied_at: app.applied_at,
    })
}

fn sort_rows(rows: &mut [ResultRow], sort: ResultSort) {
    match sort {
        ResultSort::Score => rows.sort_by(|a, b| b.score.cmp(&a.score)),
        ResultSort::Name => rows.sort_by(|a, b| a.candidate_name.cmp(&b.candidate_name)),
        ResultSort::Date => rows.sort_by(|a, b| b.applied_at.cmp(&a.applied_at)),
    }
}

fn summarize(rows: &[ResultRow]) -> ResultStats {
    if rows.is_empty() {
        return ResultStats::default();
    }
    let total = rows.len();
    let sum: u64 = rows.iter().map(|r| u64::from(r.score)).sum();
    ResultStats {
        total,
        passed: rows.iter().filter(|r| r.passed).count(),
        average_score: sum as f64 / total as f64,
        highest_score: rows.iter().map(|r| r.score).max().unwrap_or(0),
        lowest_score: rows.iter().map(|r| r.score).min().unwrap_or(0),
    }
}
