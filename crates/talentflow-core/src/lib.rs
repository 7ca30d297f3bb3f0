//! talentflow-core
//!
//! Pure domain types and document key conventions for TalentFlow.
//! No storage dependency. This is the shared vocabulary of the recruiter
//! and candidate portals.

pub mod error;
pub mod keys;
pub mod models;
