//! talentflow-assessments
//!
//! The assessment lifecycle: recruiters author assessments with the
//! [`builder::AssessmentBuilder`], candidates take them through a
//! [`session::RunSession`] driven by a [`countdown::Countdown`], and
//! [`scoring::score`] turns the recorded answers into a percentage that
//! [`submission::ResultRecorder`] writes back onto the candidate's
//! application.

pub mod builder;
pub mod catalog;
pub mod countdown;
pub mod error;
pub mod results;
pub mod scoring;
pub mod session;
pub mod submission;
