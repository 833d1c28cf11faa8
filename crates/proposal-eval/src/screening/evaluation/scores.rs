use serde::{Deserialize, Serialize};

use super::super::domain::{ImpactLevel, ProposalRecord};

const ALIGNMENT_CAP: u8 = 20;
const KPI_QUALITY_CAP: u8 = 20;

/// The seven capped sub-scores and their unweighted sum. Caps add up to 100
/// by construction, so `total` stays within 0-100 without renormalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub alignment: u8,
    pub kpi_quality: u8,
    pub impact: u8,
    pub feasibility: u8,
    pub cost_efficiency: u8,
    pub risk_compliance: u8,
    pub innovation: u8,
    pub total: u8,
}

/// Compute the rubric sub-scores for a normalized record. `months` is the
/// schedule span already derived by the gate evaluator.
pub fn evaluate_scores(record: &ProposalRecord, months: i32) -> ScoreReport {
    let alignment = ALIGNMENT_CAP.min(
        weight(!record.goal.is_empty(), 5)
            + weight(!record.kpi.name.is_empty(), 5)
            + weight(!record.kpi.unit.is_empty(), 5)
            + weight(!record.kpi.source.is_empty(), 2)
            + weight(!record.kpi.frequency.is_empty(), 3),
    );

    let filled = record.kpi.filled_count();
    let field_count = record.kpi.completeness_fields().len();
    let kpi_quality =
        (f64::from(KPI_QUALITY_CAP) * filled as f64 / field_count as f64).round() as u8;

    let impact = match record.impact {
        Some(ImpactLevel::High) => 20,
        Some(ImpactLevel::Medium) => 14,
        Some(ImpactLevel::Low) => 8,
        None => 0,
    };

    let feasibility = weight(record.team_ready.is_yes(), 6)
        + weight(record.has_milestones.is_yes(), 6)
        + weight((3..=60).contains(&months), 3);

    // When budget or beneficiary data is missing the rubric assigns a flat
    // neutral 5 rather than the bottom tier.
    let cost_efficiency = if record.budget > 0.0 && record.beneficiaries > 0.0 {
        let cost_per_beneficiary = record.budget / record.beneficiaries;
        if cost_per_beneficiary <= 200.0 {
            10
        } else if cost_per_beneficiary <= 400.0 {
            8
        } else if cost_per_beneficiary <= 800.0 {
            6
        } else {
            4
        }
    } else {
        5
    };

    let risk_compliance = weight(record.risk_count >= 3.0, 5)
        + weight(record.has_documents.is_yes(), 3)
        + weight(record.has_signature.is_yes(), 2);

    let innovation = weight(record.is_innovative.is_yes(), 5);

    let total = alignment
        + kpi_quality
        + impact
        + feasibility
        + cost_efficiency
        + risk_compliance
        + innovation;

    ScoreReport {
        alignment,
        kpi_quality,
        impact,
        feasibility,
        cost_efficiency,
        risk_compliance,
        innovation,
        total,
    }
}

const fn weight(condition: bool, points: u8) -> u8 {
    if condition {
        points
    } else {
        0
    }
}
