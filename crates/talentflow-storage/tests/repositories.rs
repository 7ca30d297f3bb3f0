use std::sync::Arc;

use uuid::Uuid;

use talentflow_core::models::application::ApplicationStatus;
use talentflow_core::models::assessment::{AssessmentCategory, AssessmentStatus};
use talentflow_core::models::job::JobStatus;
use talentflow_core::models::question::{Question, QuestionKind};
use talentflow_storage::applications::{
    ApplicationFilter, ApplicationPatch, ApplicationRepository, NewApplication,
};
use talentflow_storage::assessments::{
    AssessmentFilter, AssessmentPatch, AssessmentRepository, NewAssessment,
};
use talentflow_storage::jobs::{JobRepository, NewJob};
use talentflow_storage::memory::MemoryStore;
use talentflow_storage::store::KvStore;

fn new_assessment(owner_id: Uuid, job_id: Uuid) -> NewAssessment {
    NewAssessment {
        title: "Backend Engineer Assessment".to_string(),
        description: "Rust fundamentals".to_string(),
        category: AssessmentCategory::Technical,
        duration_minutes: 30,
        passing_score_percent: 70,
        questions: vec![Question {
            id: Uuid::new_v4(),
            prompt: "Describe ownership".to_string(),
            kind: QuestionKind::Text,
            points: 10,
            time_limit_seconds: None,
        }],
        job_id,
        job_title: "Backend Engineer".to_string(),
        company: "Acme".to_string(),
        owner_id,
        status: AssessmentStatus::Draft,
    }
}

#[tokio::test]
async fn create_assigns_id_and_timestamps() {
    let repo = AssessmentRepository::new(Arc::new(MemoryStore::new()));
    let doc = repo
        .create(new_assessment(Uuid::new_v4(), Uuid::new_v4()))
        .await
        .unwrap();

    assert_eq!(doc.created_at, doc.updated_at);
    assert_eq!(repo.get(doc.id).await.unwrap(), doc);
}

#[tokio::test]
async fn update_keeps_created_at() {
    let repo = AssessmentRepository::new(Arc::new(MemoryStore::new()));
    let doc = repo
        .create(new_assessment(Uuid::new_v4(), Uuid::new_v4()))
        .await
        .unwrap();

    let updated = repo
        .update(
            doc.id,
            AssessmentPatch {
                status: Some(AssessmentStatus::Active),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, AssessmentStatus::Active);
    assert_eq!(updated.created_at, doc.created_at);
    assert_eq!(updated.title, doc.title);
    assert!(updated.updated_at >= doc.updated_at);
}

#[tokio::test]
async fn update_of_unknown_assessment_is_not_found() {
    let repo = AssessmentRepository::new(Arc::new(MemoryStore::new()));
    let err = repo
        .update(Uuid::new_v4(), AssessmentPatch::default())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn list_filters_by_owner_and_job() {
    let repo = AssessmentRepository::new(Arc::new(MemoryStore::new()));
    let (owner_a, owner_b) = (Uuid::new_v4(), Uuid::new_v4());
    let (job_1, job_2) = (Uuid::new_v4(), Uuid::new_v4());

    repo.create(new_assessment(owner_a, job_1)).await.unwrap();
    repo.create(new_assessment(owner_a, job_2)).await.unwrap();
    repo.create(new_assessment(owner_b, job_1)).await.unwrap();

    let all = repo.list(AssessmentFilter::default()).await.unwrap();
    assert_eq!(all.len(), 3);

    let by_owner = repo
        .list(AssessmentFilter {
            owner_id: Some(owner_a),
            job_id: None,
        })
        .await
        .unwrap();
    assert_eq!(by_owner.len(), 2);

    let by_both = repo
        .list(AssessmentFilter {
            owner_id: Some(owner_a),
            job_id: Some(job_1),
        })
        .await
        .unwrap();
    assert_eq!(by_both.len(), 1);
    assert_eq!(by_both[0].job_id, job_1);
}

#[tokio::test]
async fn applications_start_without_outcome() {
    let repo = ApplicationRepository::new(Arc::new(MemoryStore::new()));
    let app = repo
        .create(NewApplication {
            candidate_id: Uuid::new_v4(),
            candidate_name: "Ada".to_string(),
            job_id: Uuid::new_v4(),
            cover_letter: None,
        })
        .await
        .unwrap();

    assert_eq!(app.status, ApplicationStatus::Applied);
    assert!(!app.assessment_completed);
    assert_eq!(app.assessment_score, None);
}

#[tokio::test]
async fn application_patch_only_touches_given_fields() {
    let repo = ApplicationRepository::new(Arc::new(MemoryStore::new()));
    let app = repo
        .create(NewApplication {
            candidate_id: Uuid::new_v4(),
            candidate_name: "Ada".to_string(),
            job_id: Uuid::new_v4(),
            cover_letter: Some("Hello".to_string()),
        })
        .await
        .unwrap();

    let updated = repo
        .update(
            app.id,
            ApplicationPatch {
                assessment_completed: Some(true),
                assessment_score: Some(85),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(updated.assessment_completed);
    assert_eq!(updated.assessment_score, Some(85));
    assert_eq!(updated.status, ApplicationStatus::Applied);
    assert_eq!(updated.cover_letter.as_deref(), Some("Hello"));
}

#[tokio::test]
async fn applications_filter_by_candidate_and_job() {
    let repo = ApplicationRepository::new(Arc::new(MemoryStore::new()));
    let candidate = Uuid::new_v4();
    let job = Uuid::new_v4();

    for (candidate_id, job_id) in [
        (candidate, job),
        (candidate, Uuid::new_v4()),
        (Uuid::new_v4(), job),
    ] {
        repo.create(NewApplication {
            candidate_id,
            candidate_name: "Someone".to_string(),
            job_id,
            cover_letter: None,
        })
        .await
        .unwrap();
    }

    let mine = repo
        .list(ApplicationFilter {
            candidate_id: Some(candidate),
            job_id: None,
        })
        .await
        .unwrap();
    assert_eq!(mine.len(), 2);

    let exact = repo
        .list(ApplicationFilter {
            candidate_id: Some(candidate),
            job_id: Some(job),
        })
        .await
        .unwrap();
    assert_eq!(exact.len(), 1);
}

#[tokio::test]
async fn jobs_are_scoped_to_their_owner() {
    let store = Arc::new(MemoryStore::new());
    let repo = JobRepository::new(store.clone());
    let (me, other) = (Uuid::new_v4(), Uuid::new_v4());

    for (owner_id, title) in [(me, "Backend"), (other, "Frontend"), (me, "Data")] {
        repo.create(NewJob {
            title: title.to_string(),
            company: "Acme".to_string(),
            owner_id,
            status: JobStatus::Active,
        })
        .await
        .unwrap();
    }

    let mine = repo.list_owned_by(me).await.unwrap();
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|job| job.owner_id == me));
    assert_eq!(store.len("jobs").await, 3);
    assert!(store.list("assessments").await.unwrap().is_empty());
}
