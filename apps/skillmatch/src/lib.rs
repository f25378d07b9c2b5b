//! Resume skill extraction and job matching.
//!
//! `extraction` turns resume text into skill labels, `matching` scores those labels against
//! job postings, and `pipeline` wires both together from `Config`.

pub mod config;
pub mod corpus;
pub mod errors;
pub mod extraction;
pub mod matching;
pub mod models;
pub mod pipeline;

pub use errors::AppError;
pub use pipeline::{MatchReport, Pipeline, ReportOptions};
