//! Scoring, recommendations, and consultant briefs for small-business AI
//! readiness assessments.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
