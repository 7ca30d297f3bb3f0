pub mod assessments;
pub mod catalog;
pub mod config;
pub mod results;
pub mod seed;
pub mod take;

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use talentflow_storage::applications::ApplicationRepository;
use talentflow_storage::assessments::AssessmentRepository;
use talentflow_storage::fs::FileStore;
use talentflow_storage::jobs::JobRepository;
use talentflow_storage::store::KvStore;

/// Repositories over one shared store.
#[derive(Clone)]
pub struct Repos {
    pub jobs: JobRepository,
    pub assessments: AssessmentRepository,
    pub applications: ApplicationRepository,
}

impl Repos {
    pub fn open(data_dir: &Path) -> Self {
        Self::with_store(Arc::new(FileStore::new(data_dir)))
    }

    pub fn with_store(store: Arc<dyn KvStore>) -> Self {
        Self {
            jobs: JobRepository::new(store.clone()),
            assessments: AssessmentRepository::new(store.clone()),
            applications: ApplicationRepository::new(store),
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
