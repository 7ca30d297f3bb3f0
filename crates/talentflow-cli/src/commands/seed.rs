use clap::Args;
use serde::Serialize;
use uuid::Uuid;

use talentflow_assessments::builder::{AssessmentBuilder, QuestionDraft};
use talentflow_core::models::assessment::{AssessmentCategory, AssessmentStatus};
use talentflow_core::models::job::JobStatus;
use talentflow_core::models::question::QuestionType;
use talentflow_storage::applications::NewApplication;
use talentflow_storage::jobs::NewJob;

use super::Repos;

#[derive(Args)]
pub struct SeedArgs {
    /// Recruiter id to seed under. Random when omitted.
    #[arg(long)]
    pub owner: Option<Uuid>,
    /// Candidate id for the demo application. Random when omitted.
    #[arg(long)]
    pub candidate: Option<Uuid>,
    #[arg(long, default_value = "Demo Candidate")]
    pub candidate_name: String,
    /// technical, behavioral, cognitive or personality
    #[arg(long, default_value = "technical")]
    pub category: AssessmentCategory,
}

/// Ids of everything written, so they can be fed to other commands.
#[derive(Serialize)]
struct Seeded {
    owner_id: Uuid,
    candidate_id: Uuid,
    job_id: Uuid,
    assessment_id: Uuid,
    application_id: Uuid,
    question_ids: Vec<Uuid>,
}

pub async fn run(repos: &Repos, args: SeedArgs) -> eyre::Result<()> {
    let owner_id = args.owner.unwrap_or_else(Uuid::new_v4);
    let candidate_id = args.candidate.unwrap_or_else(Uuid::new_v4);

    let job = repos
        .jobs
        .create(NewJob {
            title: "Backend Engineer".to_string(),
            company: "TalentFlow Demo".to_string(),
            owner_id,
            status: JobStatus::Active,
        })
        .await?;

    let mut builder = AssessmentBuilder::load(owner_id, &repos.jobs).await?;
    builder.select_job(job.id)?;
    builder.set_duration_minutes(30);
    builder.set_category(args.category);

    let mut question_ids = Vec::new();
    for draft in demo_questions() {
        *builder.draft_mut() = draft;
        question_ids.push(builder.stage_current_draft()?);
    }
    let assessment = builder.save(AssessmentStatus::Active, &repos.assessments).await?;

    let application = repos
        .applications
        .create(NewApplication {
            candidate_id,
            candidate_name: args.candidate_name,
            job_id: job.id,
            cover_letter: None,
        })
        .await?;

    tracing::info!(
        assessment_id = %assessment.id,
        application_id = %application.id,
        "demo data seeded"
    );
    super::print_json(&Seeded {
        owner_id,
        candidate_id,
        job_id: job.id,
        assessment_id: assessment.id,
        application_id: application.id,
        question_ids,
    })
}

fn demo_questions() -> Vec<QuestionDraft> {
    let mut ownership = QuestionDraft::new(
        QuestionType::MultipleChoice,
        "Which keyword moves a value into a closure?",
    );
    ownership.options = vec!["ref".to_string(), "move".to_string(), "static".to_string()];
    ownership.correct_answer_index = Some(1);
    ownership.points = 10;

    let mut design = QuestionDraft::new(
        QuestionType::Text,
        "Describe how you would make a service idempotent.",
    );
    design.points = 10;

    let confidence = QuestionDraft::new(
        QuestionType::Rating,
        "How comfortable are you with async Rust?",
    );

    let experience = QuestionDraft::new(QuestionType::Integer, "Years of professional experience");

    vec![ownership, design, confidence, experience]
}
