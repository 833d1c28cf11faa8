//! End-to-end specifications for proposal screening through the public
//! facade: normalization, gates, scores, decision, the HTTP router, and
//! batch CSV intake.

mod common {
    use proposal_eval::screening::ProposalSubmission;

    pub fn school_submission() -> ProposalSubmission {
        ProposalSubmission {
            entity_type: "school".to_string(),
            sector: "Secondary Education".to_string(),
            org_name: "Westfield Secondary School".to_string(),
            title: "Peer Tutoring Expansion".to_string(),
            code: "INIT-2026-003".to_string(),
            goal: "Goal 4".to_string(),
            kpi_name: "Math proficiency rate".to_string(),
            kpi_formula: "proficient students / assessed students".to_string(),
            kpi_unit: "%".to_string(),
            kpi_baseline: "61".to_string(),
            kpi_baseline_date: "04/2026".to_string(),
            kpi_target: "72".to_string(),
            kpi_source: "assessment platform".to_string(),
            kpi_frequency: "quarterly".to_string(),
            non_routine: "yes".to_string(),
            start: "09/2026".to_string(),
            end: "06/2028".to_string(),
            beneficiaries: "150".to_string(),
            budget: "30000".to_string(),
            reserve_fraction: "0.10".to_string(),
            risk_count: "3".to_string(),
            has_documents: "yes".to_string(),
            has_signature: "yes".to_string(),
            impact_level: "medium".to_string(),
            team_ready: "yes".to_string(),
            has_milestones: "yes".to_string(),
            is_innovative: "no".to_string(),
        }
    }
}

use common::school_submission;
use proposal_eval::screening::{
    evaluate, month_span, proposal_router, read_submissions, Decision, EntityCategory,
    GateVerdict,
};
use serde_json::json;
use std::io::Cursor;
use tower::ServiceExt;

#[test]
fn screening_pipeline_is_idempotent() {
    let record = school_submission().normalize();

    let first = evaluate(&record);
    let second = evaluate(&record);

    assert_eq!(first, second);
    assert_eq!(first.gates.verdict, GateVerdict::Passes);
    assert_eq!(first.gates.months, month_span("09/2026", "06/2028"));
}

#[test]
fn school_proposal_passes_on_the_seventy_threshold() {
    // medium impact (14) + full marks elsewhere except innovation (0):
    // 20 + 20 + 14 + 15 + 10 + 10 + 0 = 89.
    let outcome = evaluate(&school_submission().normalize());

    assert_eq!(outcome.scores.total, 89);
    assert_eq!(
        outcome.decision,
        Decision::Passed {
            category: EntityCategory::School,
            threshold: 70
        }
    );
}

#[test]
fn department_threshold_applies_to_the_same_record() {
    let mut submission = school_submission();
    submission.entity_type = "department".to_string();
    // 89 - 6 (impact low) - 6 (team) - 6 (milestones) = 71: between the
    // school threshold and the department threshold.
    submission.impact_level = "low".to_string();
    submission.team_ready = "no".to_string();
    submission.has_milestones = "no".to_string();

    let outcome = evaluate(&submission.normalize());

    assert_eq!(outcome.scores.total, 71);
    assert_eq!(
        outcome.decision,
        Decision::RejectedBelowThreshold {
            category: EntityCategory::Department,
            threshold: 75
        }
    );
}

#[test]
fn gate_failure_dominates_a_perfect_score() {
    let mut submission = school_submission();
    submission.has_signature = String::new();

    let outcome = evaluate(&submission.normalize());

    assert_eq!(outcome.gates.verdict, GateVerdict::AutoRejected);
    assert_eq!(outcome.decision, Decision::RejectedByGate);
    assert!(outcome.scores.total > 0, "score is still reported");
}

#[test]
fn batch_intake_preserves_row_order() {
    let csv = "\
entity_type,goal,non_routine,kpi_name,kpi_formula,kpi_unit,kpi_baseline,kpi_target,kpi_source,kpi_frequency,start,end,beneficiaries,budget,risk_count,has_documents,has_signature,impact_level,team_ready,has_milestones,is_innovative
school,Goal 1,yes,Attendance rate,present days / school days,%,88,93,attendance system,monthly,09/2026,06/2027,400,20000,3,yes,yes,high,yes,yes,no
department,,no,,,,,,,,,,,,,,,,,,
";

    let submissions = read_submissions(Cursor::new(csv)).expect("csv parses");
    assert_eq!(submissions.len(), 2);

    let first = evaluate(&submissions[0].normalize());
    assert!(first.decision.is_passed());

    let second = evaluate(&submissions[1].normalize());
    assert_eq!(second.decision, Decision::RejectedByGate);
}

#[tokio::test]
async fn router_exposes_the_full_evaluation() {
    let mut body = serde_json::to_value(school_submission()).unwrap();
    body["evaluated_on"] = json!("2026-05-01");

    let response = proposal_router()
        .oneshot(
            axum::http::Request::post("/api/v1/proposals/evaluate")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), axum::http::StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let payload: serde_json::Value = serde_json::from_slice(&bytes).expect("json payload");

    assert_eq!(payload["scores"]["total"], json!(89));
    assert_eq!(payload["decision"]["status"], json!("passed"));
    assert_eq!(payload["evaluated_on"], json!("2026-05-01"));
}
