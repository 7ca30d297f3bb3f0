//! talentflow-storage
//!
//! Document persistence. A [`store::KvStore`] holds flat collections of JSON
//! documents keyed by id; the repositories layer typed access for jobs,
//! assessments and applications on top of it.
//!
//! Writes are last-writer-wins. There are no transactions and no
//! optimistic-concurrency checks.

pub mod applications;
pub mod assessments;
pub mod documents;
pub mod error;
pub mod fs;
pub mod jobs;
pub mod memory;
pub mod store;
