use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use eyre::WrapErr;
use tokio::sync::Mutex;
use uuid::Uuid;

use talentflow_assessments::catalog::Catalog;
use talentflow_assessments::countdown::Countdown;
use talentflow_assessments::submission::{Recording, ResultRecorder};
use talentflow_core::models::answer::Answer;

use super::Repos;

#[derive(Args)]
pub struct TakeArgs {
    pub assessment_id: Uuid,
    #[arg(long)]
    pub candidate: Uuid,
    /// JSON object mapping question ids to answers,
    /// e.g. `{"<id>": {"kind": "choice", "value": 1}}`
    #[arg(long)]
    pub answers: PathBuf,
}

pub async fn run(repos: &Repos, args: TakeArgs) -> eyre::Result<()> {
    let raw = tokio::fs::read_to_string(&args.answers)
        .await
        .wrap_err_with(|| format!("failed to read {}", args.answers.display()))?;
    let answers: HashMap<Uuid, Answer> =
        serde_json::from_str(&raw).wrap_err("answers file is not a question id to answer map")?;

    let catalog = Catalog::new(repos.assessments.clone(), repos.applications.clone());
    let mut session = catalog.begin(args.candidate, args.assessment_id).await?;
    session.start()?;

    let session = Arc::new(Mutex::new(session));
    let recorder = ResultRecorder::new(repos.applications.clone());
    let countdown = Countdown::spawn(session.clone(), args.candidate, recorder.clone());

    let report = {
        let mut guard = session.lock().await;
        for (question_id, answer) in answers {
            guard
                .record_answer(question_id, answer)
                .wrap_err_with(|| format!("rejected answer for question {question_id}"))?;
        }
        // Page through to the last question so the run can be submitted
        while guard.unseen_questions().is_some_and(|n| n > 0) {
            guard.next();
        }
        recorder.submit(&mut guard, args.candidate).await?
    };

    // The timer may have beaten us to it; its report is the one that was recorded
    let report = if report.recording == Recording::AlreadySubmitted {
        countdown.wait().await.unwrap_or(report)
    } else {
        report
    };

    super::print_json(&report)
}
