#![allow(dead_code)]

use std::sync::Arc;

use uuid::Uuid;

use talentflow_core::models::application::Application;
use talentflow_core::models::assessment::{Assessment, AssessmentCategory, AssessmentStatus};
use talentflow_core::models::question::{Question, QuestionKind};
use talentflow_storage::applications::{ApplicationRepository, NewApplication};
use talentflow_storage::assessments::{AssessmentRepository, NewAssessment};
use talentflow_storage::jobs::JobRepository;
use talentflow_storage::memory::MemoryStore;
use talentflow_storage::store::KvStore;

pub struct Repos {
    pub store: Arc<MemoryStore>,
    pub jobs: JobRepository,
    pub assessments: AssessmentRepository,
    pub applications: ApplicationRepository,
}

pub fn repos() -> Repos {
    let store = Arc::new(MemoryStore::new());
    let shared: Arc<dyn KvStore> = store.clone();
    Repos {
        store,
        jobs: JobRepository::new(shared.clone()),
        assessments: AssessmentRepository::new(shared.clone()),
        applications: ApplicationRepository::new(shared),
    }
}

pub fn multiple_choice(points: u32, correct: usize) -> Question {
    Question {
        id: Uuid::new_v4(),
        prompt: "Which trait enables `?` on a custom error?".to_string(),
        kind: QuestionKind::MultipleChoice {
            options: vec!["Display".to_string(), "From".to_string(), "Clone".to_string()],
            correct_answer_index: Some(correct),
        },
        points,
        time_limit_seconds: Some(120),
    }
}

pub fn text(points: u32) -> Question {
    Question {
        id: Uuid::new_v4(),
        prompt: "Explain borrowing".to_string(),
        kind: QuestionKind::Text,
        points,
        time_limit_seconds: None,
    }
}

pub fn rating(points: u32) -> Question {
    Question {
        id: Uuid::new_v4(),
        prompt: "How comfortable are you with async Rust?".to_string(),
        kind: QuestionKind::Rating,
        points,
        time_limit_seconds: None,
    }
}

pub fn integer(points: u32) -> Question {
    Question {
        id: Uuid::new_v4(),
        prompt: "Years of experience".to_string(),
        kind: QuestionKind::Integer,
        points,
        time_limit_seconds: None,
    }
}

pub fn assessment(questions: Vec<Question>) -> Assessment {
    let now = jiff::Timestamp::now();
    Assessment {
        id: Uuid::new_v4(),
        title: "Backend Engineer Assessment".to_string(),
        description: "Technical assessment".to_string(),
        category: AssessmentCategory::Technical,
        duration_minutes: 1,
        passing_score_percent: 70,
        questions,
        job_id: Uuid::new_v4(),
        job_title: "Backend Engineer".to_string(),
        company: "Acme".to_string(),
        owner_id: Uuid::new_v4(),
        status: AssessmentStatus::Active,
        created_at: now,
        updated_at: now,
    }
}

/// Write an active assessment owned by `owner_id` for `job_id`.
pub async fn publish(
    repos: &Repos,
    owner_id: Uuid,
    job_id: Uuid,
    questions: Vec<Question>,
) -> Assessment {
    repos
        .assessments
        .create(NewAssessment {
            title: "Backend Engineer Assessment".to_string(),
            description: "Technical assessment".to_string(),
            category: AssessmentCategory::Technical,
            duration_minutes: 1,
            passing_score_percent: 70,
            questions,
            job_id,
            job_title: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            owner_id,
            status: AssessmentStatus::Active,
        })
        .await
        .unwrap()
}

pub async fn apply(repos: &Repos, candidate_id: Uuid, name: &str, job_id: Uuid) -> Application {
    repos
        .applications
        .create(NewApplication {
            candidate_id,
            candidate_name: name.to_string(),
            job_id,
            cover_letter: None,
        })
        .await
        .unwrap()
}
