use serde::{Deserialize, Serialize};

use super::super::domain::ProposalRecord;

/// The eight hard admissibility rules. Failing any one of them is fatal to
/// the proposal regardless of score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gate {
    Alignment,
    NonRoutine,
    KpiComplete,
    Schedule,
    RiskRegister,
    Budget,
    SupportingDocuments,
    Signature,
}

impl Gate {
    pub const ALL: [Gate; 8] = [
        Gate::Alignment,
        Gate::NonRoutine,
        Gate::KpiComplete,
        Gate::Schedule,
        Gate::RiskRegister,
        Gate::Budget,
        Gate::SupportingDocuments,
        Gate::Signature,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Gate::Alignment => "goal alignment",
            Gate::NonRoutine => "non-routine initiative",
            Gate::KpiComplete => "complete KPI card",
            Gate::Schedule => "valid schedule",
            Gate::RiskRegister => "at least three documented risks",
            Gate::Budget => "positive budget",
            Gate::SupportingDocuments => "supporting documents",
            Gate::Signature => "signature",
        }
    }
}

/// Single pass/auto-reject summary across all eight gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateVerdict {
    Passes,
    AutoRejected,
}

impl GateVerdict {
    pub const fn label(self) -> &'static str {
        match self {
            GateVerdict::Passes => "passes for evaluation",
            GateVerdict::AutoRejected => "auto-rejected",
        }
    }

    pub const fn is_auto_rejected(self) -> bool {
        matches!(self, GateVerdict::AutoRejected)
    }
}

/// Per-gate verdicts plus the computed schedule span and aggregate outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateReport {
    pub months: i32,
    pub alignment: bool,
    pub non_routine: bool,
    pub kpi_complete: bool,
    pub schedule: bool,
    pub risk_register: bool,
    pub budget: bool,
    pub supporting_documents: bool,
    pub signature: bool,
    pub verdict: GateVerdict,
}

impl GateReport {
    pub fn passed(&self, gate: Gate) -> bool {
        match gate {
            Gate::Alignment => self.alignment,
            Gate::NonRoutine => self.non_routine,
            Gate::KpiComplete => self.kpi_complete,
            Gate::Schedule => self.schedule,
            Gate::RiskRegister => self.risk_register,
            Gate::Budget => self.budget,
            Gate::SupportingDocuments => self.supporting_documents,
            Gate::Signature => self.signature,
        }
    }

    /// Failing gates in declaration order. The order only affects how
    /// failure reasons are listed in rendered output, never the verdict.
    pub fn failures(&self) -> Vec<Gate> {
        Gate::ALL
            .into_iter()
            .filter(|gate| !self.passed(*gate))
            .collect()
    }
}

/// Apply the eight independent admissibility checks to a normalized record.
pub fn evaluate_gates(record: &ProposalRecord) -> GateReport {
    let months = record.schedule_months();

    let alignment = !record.goal.is_empty();
    let non_routine = record.non_routine.is_yes();
    let kpi_complete = record.kpi.is_complete();
    let schedule = record.start.is_some() && record.end.is_some() && months > 0;
    let risk_register = record.risk_count >= 3.0;
    let budget = record.budget > 0.0;
    let supporting_documents = record.has_documents.is_yes();
    let signature = record.has_signature.is_yes();

    let all_pass = alignment
        && non_routine
        && kpi_complete
        && schedule
        && risk_register
        && budget
        && supporting_documents
        && signature;
    let verdict = if all_pass {
        GateVerdict::Passes
    } else {
        GateVerdict::AutoRejected
    };

    GateReport {
        months,
        alignment,
        non_routine,
        kpi_complete,
        schedule,
        risk_register,
        budget,
        supporting_documents,
        signature,
        verdict,
    }
}
