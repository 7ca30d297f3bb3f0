//! Collection names and document key conventions.
//!
//! Every document type lives in a flat collection keyed by its own `id`;
//! stores that need a path use [`document`].

pub const JOBS: &str = "jobs";

pub const ASSESSMENTS: &str = "assessments";

pub const APPLICATIONS: &str = "applications";

/// `{collection}/{id}.json`
pub fn document(collection: &str, id: &str) -> String {
    format!("{collection}/{id}.json")
}
