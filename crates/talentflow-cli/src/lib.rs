//! Command-line front end for the TalentFlow assessment workflow.
//!
//! Every command opens the file-backed store under the configured data
//! directory and prints its result as JSON on stdout. Logs go to stderr.

pub mod commands;
pub mod config;
