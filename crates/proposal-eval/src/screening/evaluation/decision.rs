use serde::{Deserialize, Serialize};

use super::super::domain::EntityCategory;
use super::gates::GateVerdict;

/// Terminal decision for a screened proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Decision {
    /// One or more gates failed; the score is reported but not decisive.
    RejectedByGate,
    Passed {
        category: EntityCategory,
        threshold: u8,
    },
    RejectedBelowThreshold {
        category: EntityCategory,
        threshold: u8,
    },
    /// No recognizable organizational category was supplied.
    Undetermined,
}

impl Decision {
    pub fn summary(&self) -> String {
        match self {
            Decision::RejectedByGate => "rejected at gate".to_string(),
            Decision::Passed { category, .. } => format!("passed ({})", category.label()),
            Decision::RejectedBelowThreshold {
                category,
                threshold,
            } => format!("rejected ({} below {})", category.label(), threshold),
            Decision::Undetermined => "undetermined (no category)".to_string(),
        }
    }

    pub const fn is_passed(&self) -> bool {
        matches!(self, Decision::Passed { .. })
    }
}

/// Combine the aggregate gate verdict, the submitter category, and the total
/// score. An auto-rejecting gate short-circuits everything else; an unknown
/// category is a valid terminal state, never an error.
pub fn decide(category: Option<EntityCategory>, verdict: GateVerdict, total: u8) -> Decision {
    if verdict.is_auto_rejected() {
        return Decision::RejectedByGate;
    }

    match category {
        Some(category) => {
            let threshold = category.pass_threshold();
            if total >= threshold {
                Decision::Passed {
                    category,
                    threshold,
                }
            } else {
                Decision::RejectedBelowThreshold {
                    category,
                    threshold,
                }
            }
        }
        None => Decision::Undetermined,
    }
}
