//! CLI library components for the survey scorer.

pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
