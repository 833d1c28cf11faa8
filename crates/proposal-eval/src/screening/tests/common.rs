use axum::response::Response;
use serde_json::Value;

use crate::screening::domain::{ProposalRecord, ProposalSubmission};

/// A fully filled school proposal: every gate passes, every sub-score is at
/// its cap (schedule span 21 months, cost per beneficiary exactly 200).
pub(super) fn complete_submission() -> ProposalSubmission {
    ProposalSubmission {
        entity_type: "school".to_string(),
        sector: "Primary Education".to_string(),
        org_name: "Northgate Primary School".to_string(),
        title: "Reading Fluency Initiative".to_string(),
        code: "INIT-2025-014".to_string(),
        goal: "Goal 2".to_string(),
        kpi_name: "Reading fluency rate".to_string(),
        kpi_formula: "fluent readers / assessed students".to_string(),
        kpi_unit: "%".to_string(),
        kpi_baseline: "54".to_string(),
        kpi_baseline_date: "05/2025".to_string(),
        kpi_target: "75".to_string(),
        kpi_source: "assessment platform".to_string(),
        kpi_frequency: "monthly".to_string(),
        non_routine: "yes".to_string(),
        start: "09/2025".to_string(),
        end: "06/2027".to_string(),
        beneficiaries: "20".to_string(),
        budget: "4000".to_string(),
        reserve_fraction: "0.10".to_string(),
        risk_count: "3".to_string(),
        has_documents: "yes".to_string(),
        has_signature: "yes".to_string(),
        impact_level: "high".to_string(),
        team_ready: "yes".to_string(),
        has_milestones: "yes".to_string(),
        is_innovative: "yes".to_string(),
    }
}

pub(super) fn complete_record() -> ProposalRecord {
    complete_submission().normalize()
}

pub(super) fn record_with(mutate: impl FnOnce(&mut ProposalSubmission)) -> ProposalRecord {
    let mut submission = complete_submission();
    mutate(&mut submission);
    submission.normalize()
}

pub(super) fn empty_record() -> ProposalRecord {
    ProposalSubmission::default().normalize()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
