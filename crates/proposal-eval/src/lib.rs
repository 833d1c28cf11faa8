//! Screening engine for school and department initiative proposals.
//!
//! A submitted proposal record is normalized once, then pushed through a
//! pure pipeline: eight hard admissibility gates, a seven-dimension weighted
//! rubric (0-100), and a category-aware pass/fail decision. The [`screening`]
//! module also carries the HTTP router and the collaborator surfaces built
//! around the engine (narrative explanations, supporting-document review,
//! CSV batch intake).

pub mod config;
pub mod error;
pub mod screening;
pub mod telemetry;
