mod common;

use uuid::Uuid;

use talentflow_assessments::catalog::{AssignmentState, Catalog};
use talentflow_assessments::error::{AssessmentError, RunnerError};
use talentflow_assessments::submission::ResultRecorder;
use talentflow_core::models::assessment::AssessmentStatus;
use talentflow_storage::assessments::AssessmentPatch;

use common::{apply, multiple_choice, publish, repos, text};

fn catalog(repos: &common::Repos) -> Catalog {
    Catalog::new(repos.assessments.clone(), repos.applications.clone())
}

#[tokio::test]
async fn lists_active_assessments_for_applied_jobs() {
    let repos = repos();
    let candidate = Uuid::new_v4();
    let owner = Uuid::new_v4();
    let applied_job = Uuid::new_v4();

    let wanted = publish(&repos, owner, applied_job, vec![multiple_choice(10, 0), text(5)]).await;
    let draft = publish(&repos, owner, applied_job, vec![text(5)]).await;
    repos
        .assessments
        .update(
            draft.id,
            AssessmentPatch {
                status: Some(AssessmentStatus::Draft),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    publish(&repos, owner, Uuid::new_v4(), vec![text(5)]).await;
    let application = apply(&repos, candidate, "Linus", applied_job).await;

    let listed = catalog(&repos).available_for(candidate).await.unwrap();
    assert_eq!(listed.len(), 1);
    let entry = &listed[0];
    assert_eq!(entry.assessment_id, wanted.id);
    assert_eq!(entry.application_id, application.id);
    assert_eq!(entry.question_count, 2);
    assert_eq!(entry.max_score, 15);
    assert_eq!(entry.state, AssignmentState::Pending);
}

#[tokio::test]
async fn candidate_without_applications_sees_nothing() {
    let repos = repos();
    publish(&repos, Uuid::new_v4(), Uuid::new_v4(), vec![text(5)]).await;
    let listed = catalog(&repos).available_for(Uuid::new_v4()).await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn completed_assessments_are_marked_and_cannot_be_retaken() {
    let repos = repos();
    let candidate = Uuid::new_v4();
    let job_id = Uuid::new_v4();
    let assessment = publish(&repos, Uuid::new_v4(), job_id, vec![text(10)]).await;
    apply(&repos, candidate, "Linus", job_id).await;
    let catalog = catalog(&repos);

    let mut session = catalog.begin(candidate, assessment.id).await.unwrap();
    assert!(!session.is_started());
    session.start().unwrap();
    ResultRecorder::new(repos.applications.clone())
        .submit(&mut session, candidate)
        .await
        .unwrap();

    let listed = catalog.available_for(candidate).await.unwrap();
    assert_eq!(listed[0].state, AssignmentState::Completed { score: Some(0) });

    let err = catalog.begin(candidate, assessment.id).await.unwrap_err();
    assert!(matches!(err, AssessmentError::AlreadyCompleted { .. }));
}

#[tokio::test]
async fn begin_refuses_drafts_and_unknown_ids() {
    let repos = repos();
    let job_id = Uuid::new_v4();
    let assessment = publish(&repos, Uuid::new_v4(), job_id, vec![text(10)]).await;
    repos
        .assessments
        .update(
            assessment.id,
            AssessmentPatch {
                status: Some(AssessmentStatus::Draft),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let catalog = catalog(&repos);

    let err = catalog.begin(Uuid::new_v4(), assessment.id).await.unwrap_err();
    assert!(matches!(err, AssessmentError::Runner(RunnerError::NotActive(_))));

    let err = catalog.begin(Uuid::new_v4(), Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, AssessmentError::Storage(ref e) if e.is_not_found()));
}

#[tokio::test]
async fn begin_without_application_is_allowed() {
    let repos = repos();
    let assessment = publish(&repos, Uuid::new_v4(), Uuid::new_v4(), vec![text(10)]).await;
    let session = catalog(&repos).begin(Uuid::new_v4(), assessment.id).await.unwrap();
    assert_eq!(session.assessment().id, assessment.id);
}
