//! Initiative proposal screening: normalization, admissibility gates,
//! rubric scoring, decisions, and the surrounding collaborator surfaces
//! (narrative explanation, document review, CSV batch intake).

pub mod documents;
pub mod domain;
pub mod evaluation;
pub mod explanation;
pub mod intake;
pub mod period;
pub mod router;

#[cfg(test)]
mod tests;

pub use documents::{review, DocumentReview, FileAssessment, FileDescriptor, ReviewCheck};
pub use domain::{
    EntityCategory, ImpactLevel, KpiCard, ProposalRecord, ProposalSubmission, YesNo,
};
pub use evaluation::{
    decide, evaluate, evaluate_gates, evaluate_scores, Decision, EvaluationOutcome, Gate,
    GateReport, GateVerdict, ScoreReport,
};
pub use explanation::narrate;
pub use intake::{read_submissions, read_submissions_from_path, IntakeError};
pub use period::{month_span, Period};
pub use router::proposal_router;
