//! Pure evaluation pipeline: gates, rubric scores, and the final decision.
//!
//! Every function here is a stateless transformation over a normalized
//! [`ProposalRecord`]; evaluating the same record twice yields identical
//! results, and concurrent callers need no synchronization.

mod decision;
mod gates;
mod scores;

pub use decision::{decide, Decision};
pub use gates::{evaluate_gates, Gate, GateReport, GateVerdict};
pub use scores::{evaluate_scores, ScoreReport};

use serde::{Deserialize, Serialize};

use super::domain::ProposalRecord;

/// Full evaluation output: gate verdicts, rubric scores, and the decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub gates: GateReport,
    pub scores: ScoreReport,
    pub decision: Decision,
}

/// Run the whole pipeline over one record.
pub fn evaluate(record: &ProposalRecord) -> EvaluationOutcome {
    let gates = evaluate_gates(record);
    let scores = evaluate_scores(record, gates.months);
    let decision = decide(record.category, gates.verdict, scores.total);

    EvaluationOutcome {
        gates,
        scores,
        decision,
    }
}
