use std::sync::Arc;

use uuid::Uuid;

use talentflow_core::keys;
use talentflow_core::models::application::{Application, ApplicationStatus};

use crate::documents;
use crate::error::StorageError;
use crate::store::KvStore;

#[derive(Debug, Clone)]
pub struct NewApplication {
    pub candidate_id: Uuid,
    pub candidate_name: String,
    pub job_id: Uuid,
    pub cover_letter: Option<String>,
}

/// Partial update. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct ApplicationPatch {
    pub status: Option<ApplicationStatus>,
    pub assessment_completed: Option<bool>,
    pub assessment_score: Option<u8>,
    pub cover_letter: Option<String>,
}

impl ApplicationPatch {
    fn apply(self, doc: &mut Application) {
        if let Some(v) = self.status {
            doc.status = v;
        }
        if let Some(v) = self.assessment_completed {
            doc.assessment_completed = v;
        }
        if let Some(v) = self.assessment_score {
            doc.assessment_score = Some(v);
        }
        if let Some(v) = self.cover_letter {
            doc.cover_letter = Some(v);
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ApplicationFilter {
    pub candidate_id: Option<Uuid>,
    pub job_id: Option<Uuid>,
}

impl ApplicationFilter {
    fn matches(&self, doc: &Application) -> bool {
        self.candidate_id.is_none_or(|id| doc.candidate_id == id)
            && self.job_id.is_none_or(|id| doc.job_id == id)
    }
}

#[derive(Clone)]
pub struct ApplicationRepository {
    store: Arc<dyn KvStore>,
}

impl ApplicationRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// New applications start at `Applied` with no assessment outcome.
    pub async fn create(&self, new: NewApplication) -> Result<Application, StorageError> {
        let doc = Application {
            id: Uuid::new_v4(),
            candidate_id: new.candidate_id,
            candidate_name: new.candidate_name,
            job_id: new.job_id,
            status: ApplicationStatus::Applied,
            assessment_completed: false,
            assessment_score: None,
            applied_at: jiff::Timestamp::now(),
            cover_letter: new.cover_letter,
        };
        self.put(&doc).await?;
        tracing::debug!(application_id = %doc.id, job_id = %doc.job_id, "application created");
        Ok(doc)
    }

    pub async fn get(&self, id: Uuid) -> Result<Application, StorageError> {
        documents::load(self.store.as_ref(), keys::APPLICATIONS, &id.to_string()).await
    }

    /// Matching applications, oldest first.
    pub async fn list(&self, filter: ApplicationFilter) -> Result<Vec<Application>, StorageError> {
        let mut docs: Vec<Application> =
            documents::load_all(self.store.as_ref(), keys::APPLICATIONS).await?;
        docs.retain(|doc| filter.matches(doc));
        docs.sort_by_key(|doc| doc.applied_at);
        Ok(docs)
    }

    /// Read-modify-write, last write wins.
    pub async fn update(
        &self,
        id: Uuid,
        patch: ApplicationPatch,
    ) -> Result<Application, StorageError> {
        let mut doc = self.get(id).await?;
        patch.apply(&mut doc);
        self.put(&doc).await?;
        tracing::debug!(application_id = %doc.id, status = %doc.status, "application updated");
        Ok(doc)
    }

    async fn put(&self, doc: &Application) -> Result<(), StorageError> {
        documents::save(self.store.as_ref(), keys::APPLICATIONS, &doc.id.to_string(), doc).await
    }
}
