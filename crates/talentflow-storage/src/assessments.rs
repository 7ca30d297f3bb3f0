use std::sync::Arc;

use uuid::Uuid;

use talentflow_core::keys;
use talentflow_core::models::assessment::{Assessment, AssessmentCategory, AssessmentStatus};
use talentflow_core::models::question::Question;

use crate::documents;
use crate::error::StorageError;
use crate::store::KvStore;

/// An assessment document before the store assigns its id and timestamps.
#[derive(Debug, Clone)]
pub struct NewAssessment {
    pub title: String,
    pub description: String,
    pub category: AssessmentCategory,
    pub duration_minutes: u32,
    pub passing_score_percent: u8,
    pub questions: Vec<Question>,
    pub job_id: Uuid,
    pub job_title: String,
    pub company: String,
    pub owner_id: Uuid,
    pub status: AssessmentStatus,
}

/// Partial update. `None` leaves a field untouched. `created_at` and
/// `owner_id` are not patchable.
#[derive(Debug, Clone, Default)]
pub struct AssessmentPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<AssessmentCategory>,
    pub duration_minutes: Option<u32>,
    pub passing_score_percent: Option<u8>,
    pub questions: Option<Vec<Question>>,
    pub job_id: Option<Uuid>,
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub status: Option<AssessmentStatus>,
}

impl AssessmentPatch {
    /// A patch that overwrites every editable field with the values in `doc`.
    pub fn replace_with(doc: NewAssessment) -> Self {
        Self {
            title: Some(doc.title),
            description: Some(doc.description),
            category: Some(doc.category),
            duration_minutes: Some(doc.duration_minutes),
            passing_score_percent: Some(doc.passing_score_percent),
            questions: Some(doc.questions),
            job_id: Some(doc.job_id),
            job_title: Some(doc.job_title),
            company: Some(doc.company),
            status: Some(doc.status),
        }
    }

    fn apply(self, doc: &mut Assessment) {
        if let Some(v) = self.title {
            doc.title = v;
        }
        if let Some(v) = self.description {
            doc.description = v;
        }
        if let Some(v) = self.category {
            doc.category = v;
        }
        if let Some(v) = self.duration_minutes {
            doc.duration_minutes = v;
        }
        if let Some(v) = self.passing_score_percent {
            doc.passing_score_percent = v;
        }
        if let Some(v) = self.questions {
            doc.questions = v;
        }
        if let Some(v) = self.job_id {
            doc.job_id = v;
        }
        if let Some(v) = self.job_title {
            doc.job_title = v;
        }
        if let Some(v) = self.company {
            doc.company = v;
        }
        if let Some(v) = self.status {
            doc.status = v;
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AssessmentFilter {
    pub owner_id: Option<Uuid>,
    pub job_id: Option<Uuid>,
}

impl AssessmentFilter {
    fn matches(&self, doc: &Assessment) -> bool {
        self.owner_id.is_none_or(|id| doc.owner_id == id)
            && self.job_id.is_none_or(|id| doc.job_id == id)
    }
}

/// Assessment documents. There is deliberately no delete.
#[derive(Clone)]
pub struct AssessmentRepository {
    store: Arc<dyn KvStore>,
}

impl AssessmentRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, new: NewAssessment) -> Result<Assessment, StorageError> {
        let now = jiff::Timestamp::now();
        let doc = Assessment {
            id: Uuid::new_v4(),
            title: new.title,
            description: new.description,
            category: new.category,
            duration_minutes: new.duration_minutes,
            passing_score_percent: new.passing_score_percent,
            questions: new.questions,
            job_id: new.job_id,
            job_title: new.job_title,
            company: new.company,
            owner_id: new.owner_id,
            status: new.status,
            created_at: now,
            updated_at: now,
        };
        self.put(&doc).await?;
        tracing::debug!(assessment_id = %doc.id, status = %doc.status, "assessment created");
        Ok(doc)
    }

    pub async fn get(&self, id: Uuid) -> Result<Assessment, StorageError> {
        documents::load(self.store.as_ref(), keys::ASSESSMENTS, &id.to_string()).await
    }

    /// Matching assessments, oldest first.
    pub async fn list(&self, filter: AssessmentFilter) -> Result<Vec<Assessment>, StorageError> {
        let mut docs: Vec<Assessment> =
            documents::load_all(self.store.as_ref(), keys::ASSESSMENTS).await?;
        docs.retain(|doc| filter.matches(doc));
        docs.sort_by_key(|doc| doc.created_at);
        Ok(docs)
    }

    /// Read-modify-write. Concurrent updates to the same id race and the
    /// last write wins.
    pub async fn update(
        &self,
        id: Uuid,
        patch: AssessmentPatch,
    ) -> Result<Assessment, StorageError> {
        let mut doc = self.get(id).await?;
        patch.apply(&mut doc);
        doc.updated_at = jiff::Timestamp::now();
        self.put(&doc).await?;
        tracing::debug!(assessment_id = %doc.id, status = %doc.status, "assessment updated");
        Ok(doc)
    }

    async fn put(&self, doc: &Assessment) -> Result<(), StorageError> {
        documents::save(self.store.as_ref(), keys::ASSESSMENTS, &doc.id.to_string(), doc).await
    }
}
