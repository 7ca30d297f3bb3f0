mod common;

use uuid::Uuid;

use talentflow_assessments::session::{RunSession, SubmitReason};
use talentflow_assessments::submission::{Recording, ResultRecorder};
use talentflow_core::models::answer::Answer;
use talentflow_core::models::application::ApplicationStatus;

use common::{apply, multiple_choice, publish, repos, text};

#[tokio::test]
async fn passing_submit_marks_application_completed() {
    let repos = repos();
    let candidate = Uuid::new_v4();
    let job_id = Uuid::new_v4();
    let mc = multiple_choice(10, 1);
    let assessment = publish(&repos, Uuid::new_v4(), job_id, vec![mc.clone()]).await;
    let application = apply(&repos, candidate, "Ada", job_id).await;

    let mut session = RunSession::new(assessment).unwrap();
    session.start().unwrap();
    session.record_answer(mc.id, Answer::Choice(1)).unwrap();

    let recorder = ResultRecorder::new(repos.applications.clone());
    let report = recorder.submit(&mut session, candidate).await.unwrap();

    assert_eq!(report.reason, SubmitReason::Manual);
    assert_eq!(report.score.percent, 100);
    assert_eq!(
        report.recording,
        Recording::Recorded {
            application_id: application.id
        }
    );

    let stored = repos.applications.get(application.id).await.unwrap();
    assert!(stored.assessment_completed);
    assert_eq!(stored.assessment_score, Some(100));
    assert_eq!(stored.status, ApplicationStatus::AssessmentCompleted);
}

#[tokio::test]
async fn failing_submit_marks_application_failed() {
    let repos = repos();
    let candidate = Uuid::new_v4();
    let job_id = Uuid::new_v4();
    let assessment = publish(&repos, Uuid::new_v4(), job_id, vec![multiple_choice(10, 1)]).await;
    let application = apply(&repos, candidate, "Ada", job_id).await;

    let mut session = RunSession::new(assessment).unwrap();
    session.start().unwrap();

    let recorder = ResultRecorder::new(repos.applications.clone());
    let report = recorder.submit(&mut session, candidate).await.unwrap();
    assert_eq!(report.score.percent, 0);
    assert!(!report.score.passed);

    let stored = repos.applications.get(application.id).await.unwrap();
    assert!(stored.assessment_completed);
    assert_eq!(stored.assessment_score, Some(0));
    assert_eq!(stored.status, ApplicationStatus::AssessmentFailed);
}

#[tokio::test]
async fn second_submit_writes_nothing() {
    let repos = repos();
    let candidate = Uuid::new_v4();
    let job_id = Uuid::new_v4();
    let t = text(10);
    let assessment = publish(&repos, Uuid::new_v4(), job_id, vec![t.clone()]).await;
    let application = apply(&repos, candidate, "Ada", job_id).await;

    let mut session = RunSession::new(assessment).unwrap();
    session.start().unwrap();
    session.record_answer(t.id, Answer::Text("ownership".to_string())).unwrap();

    let recorder = ResultRecorder::new(repos.applications.clone());
    let first = recorder.submit(&mut session, candidate).await.unwrap();

    // Something else touches the application between the two submits
    repos
        .applications
        .update(
            application.id,
            talentflow_storage::applications::ApplicationPatch {
                status: Some(ApplicationStatus::Shortlisted),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let second = recorder.submit(&mut session, candidate).await.unwrap();
    assert_eq!(second.recording, Recording::AlreadySubmitted);
    assert_eq!(second.score, first.score);

    let stored = repos.applications.get(application.id).await.unwrap();
    assert_eq!(stored.status, ApplicationStatus::Shortlisted);
}

#[tokio::test]
async fn missing_application_still_reports_score() {
    let repos = repos();
    let candidate = Uuid::new_v4();
    let mc = multiple_choice(10, 0);
    let assessment = publish(&repos, Uuid::new_v4(), Uuid::new_v4(), vec![mc.clone()]).await;

    let mut session = RunSession::new(assessment).unwrap();
    session.start().unwrap();
    session.record_answer(mc.id, Answer::Choice(0)).unwrap();

    let recorder = ResultRecorder::new(repos.applications.clone());
    let report = recorder.submit(&mut session, candidate).await.unwrap();

    assert_eq!(report.recording, Recording::NoApplication);
    assert_eq!(report.score.percent, 100);
    assert!(session.is_completed());
    assert_eq!(repos.store.len("applications").await, 0);
}

#[tokio::test]
async fn only_the_first_application_for_the_job_is_updated() {
    let repos = repos();
    let candidate = Uuid::new_v4();
    let job_id = Uuid::new_v4();
    let assessment = publish(&repos, Uuid::new_v4(), job_id, vec![text(5)]).await;
    let first = apply(&repos, candidate, "Ada", job_id).await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = apply(&repos, candidate, "Ada", job_id).await;

    let mut session = RunSession::new(assessment).unwrap();
    session.start().unwrap();
    let recorder = ResultRecorder::new(repos.applications.clone());
    recorder.submit(&mut session, candidate).await.unwrap();

    assert!(repos.applications.get(first.id).await.unwrap().assessment_completed);
    assert!(!repos.applications.get(second.id).await.unwrap().assessment_completed);
}
