use clap::Args;
use serde::Serialize;
use uuid::Uuid;

use talentflow_core::models::assessment::{Assessment, AssessmentStatus};
use talentflow_storage::assessments::AssessmentFilter;

use super::Repos;

#[derive(Args)]
pub struct AssessmentsArgs {
    /// Only assessments owned by this recruiter
    #[arg(long)]
    pub owner: Option<Uuid>,
    /// Only assessments for this job
    #[arg(long)]
    pub job: Option<Uuid>,
}

#[derive(Serialize)]
struct Listing {
    id: Uuid,
    title: String,
    job_title: String,
    status: AssessmentStatus,
    questions: usize,
    max_score: u32,
    duration_minutes: u32,
    passing_score_percent: u8,
    updated_at: jiff::Timestamp,
}

impl From<Assessment> for Listing {
    fn from(a: Assessment) -> Self {
        Self {
            id: a.id,
            questions: a.questions.len(),
            max_score: a.max_score(),
            title: a.title,
            job_title: a.job_title,
            status: a.status,
            duration_minutes: a.duration_minutes,
            passing_score_percent: a.passing_score_percent,
            updated_at: a.updated_at,
        }
    }
}

pub async fn run(repos: &Repos, args: AssessmentsArgs) -> eyre::Result<()> {
    let found = repos
        .assessments
        .list(AssessmentFilter {
            owner_id: args.owner,
            job_id: args.job,
        })
        .await?;
    let listings: Vec<Listing> = found.into_iter().map(Listing::from).collect();
    super::print_json(&listings)
}
