pub mod answer;
pub mod application;
pub mod assessment;
pub mod job;
pub mod question;
