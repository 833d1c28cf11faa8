use crate::screening::domain::EntityCategory;
use crate::screening::evaluation::{decide, Decision, GateVerdict};

#[test]
fn school_threshold_is_seventy_inclusive() {
    assert_eq!(
        decide(Some(EntityCategory::School), GateVerdict::Passes, 70),
        Decision::Passed {
            category: EntityCategory::School,
            threshold: 70
        }
    );
    assert_eq!(
        decide(Some(EntityCategory::School), GateVerdict::Passes, 69),
        Decision::RejectedBelowThreshold {
            category: EntityCategory::School,
            threshold: 70
        }
    );
}

#[test]
fn department_threshold_is_seventy_five_inclusive() {
    assert_eq!(
        decide(Some(EntityCategory::Department), GateVerdict::Passes, 75),
        Decision::Passed {
            category: EntityCategory::Department,
            threshold: 75
        }
    );
    assert_eq!(
        decide(Some(EntityCategory::Department), GateVerdict::Passes, 74),
        Decision::RejectedBelowThreshold {
            category: EntityCategory::Department,
            threshold: 75
        }
    );
}

#[test]
fn gate_rejection_short_circuits_score_and_category() {
    assert_eq!(
        decide(
            Some(EntityCategory::School),
            GateVerdict::AutoRejected,
            100
        ),
        Decision::RejectedByGate
    );
    assert_eq!(
        decide(None, GateVerdict::AutoRejected, 0),
        Decision::RejectedByGate
    );
}

#[test]
fn missing_category_is_undetermined_not_an_error() {
    assert_eq!(
        decide(None, GateVerdict::Passes, 100),
        Decision::Undetermined
    );
}

#[test]
fn summaries_name_category_and_threshold() {
    assert_eq!(
        decide(Some(EntityCategory::School), GateVerdict::Passes, 82).summary(),
        "passed (school)"
    );
    assert_eq!(
        decide(Some(EntityCategory::Department), GateVerdict::Passes, 60).summary(),
        "rejected (department below 75)"
    );
    assert_eq!(Decision::RejectedByGate.summary(), "rejected at gate");
    assert_eq!(Decision::Undetermined.summary(), "undetermined (no category)");
}
