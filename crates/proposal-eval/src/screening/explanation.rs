//! Narrative rendering of a gate verdict with strengths and quick fixes.
//!
//! The text is derived from the same [`GateReport`] the engine produced, so
//! the listed reasons can never drift from the gate rules themselves. The
//! output is free text for human readers; nothing downstream parses it.

use super::domain::ProposalRecord;
use super::evaluation::{Gate, GateReport};

const MAX_STRENGTHS: usize = 3;
const MAX_FIXES: usize = 3;

/// Cost-per-beneficiary level below which spending reads as efficient.
const EFFICIENT_COST_PER_BENEFICIARY: f64 = 400.0;

/// Build the short narrative summary for a screened proposal.
pub fn narrate(record: &ProposalRecord, gates: &GateReport) -> String {
    let mut lines = Vec::with_capacity(3);

    let failures = gates.failures();
    if failures.is_empty() {
        lines.push("Gate verdict: passes for evaluation".to_string());
    } else {
        let reasons = failures
            .iter()
            .map(|gate| gate.label())
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("Gate verdict: auto-reject; reasons: {reasons}"));
    }

    let strengths = strengths(record);
    if !strengths.is_empty() {
        lines.push(format!(
            "Strengths: {}",
            strengths[..strengths.len().min(MAX_STRENGTHS)].join(", ")
        ));
    }

    let fixes = fixes(&failures);
    lines.push(format!(
        "Quick fixes: {}",
        fixes[..fixes.len().min(MAX_FIXES)].join(", ")
    ));

    lines.join("\n")
}

fn strengths(record: &ProposalRecord) -> Vec<&'static str> {
    let mut strengths = Vec::new();
    if record.kpi.is_complete() {
        strengths.push("complete KPI card");
    }
    if record.team_ready.is_yes() && record.has_milestones.is_yes() {
        strengths.push("solid delivery readiness");
    }
    if record.is_innovative.is_yes() {
        strengths.push("innovation and added value");
    }
    if record.budget > 0.0
        && record.beneficiaries > 0.0
        && record.budget / record.beneficiaries <= EFFICIENT_COST_PER_BENEFICIARY
    {
        strengths.push("reasonable cost per beneficiary");
    }
    strengths
}

fn fixes(failures: &[Gate]) -> Vec<&'static str> {
    let mut fixes = Vec::new();
    if failures.contains(&Gate::KpiComplete) {
        fixes.push("complete the KPI name, formula, unit, baseline, and target");
    }
    if failures.contains(&Gate::Schedule) {
        fixes.push("correct the start/end periods (MM/YYYY)");
    }
    if failures.contains(&Gate::RiskRegister) {
        fixes.push("document at least three key risks with a response for each");
    }
    if failures.contains(&Gate::Budget) {
        fixes.push("set a realistic budget tied to the deliverables");
    }
    if fixes.is_empty() {
        fixes.push("strengthen the follow-up plan with monthly leading indicators");
    }
    fixes
}
