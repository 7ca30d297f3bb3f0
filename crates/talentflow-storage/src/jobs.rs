use std::sync::Arc;

use uuid::Uuid;

use talentflow_core::keys;
use talentflow_core::models::job::{Job, JobStatus};

use crate::documents;
use crate::error::StorageError;
use crate::store::KvStore;

/// Fields supplied when posting a job. Id and timestamp are assigned on create.
#[derive(Debug, Clone)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub owner_id: Uuid,
    pub status: JobStatus,
}

#[derive(Clone)]
pub struct JobRepository {
    store: Arc<dyn KvStore>,
}

impl JobRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, new: NewJob) -> Result<Job, StorageError> {
        let job = Job {
            id: Uuid::new_v4(),
            title: new.title,
            company: new.company,
            owner_id: new.owner_id,
            status: new.status,
            created_at: jiff::Timestamp::now(),
        };
        documents::save(self.store.as_ref(), keys::JOBS, &job.id.to_string(), &job).await?;
        tracing::debug!(job_id = %job.id, "job created");
        Ok(job)
    }

    pub async fn get(&self, id: Uuid) -> Result<Job, StorageError> {
        documents::load(self.store.as_ref(), keys::JOBS, &id.to_string()).await
    }

    /// Jobs posted by one recruiter, oldest first.
    pub async fn list_owned_by(&self, owner_id: Uuid) -> Result<Vec<Job>, StorageError> {
        let mut jobs: Vec<Job> = documents::load_all(self.store.as_ref(), keys::JOBS).await?;
        jobs.retain(|job| job.owner_id == owner_id);
        jobs.sort_by_key(|job| job.created_at);
        Ok(jobs)
    }
}
