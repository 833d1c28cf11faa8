use serde::{Deserialize, Serialize};

use super::period::Period;

/// Organizational category of the submitting entity. Drives which pass
/// threshold applies during the final decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityCategory {
    School,
    Department,
}

impl EntityCategory {
    pub const fn label(self) -> &'static str {
        match self {
            EntityCategory::School => "school",
            EntityCategory::Department => "department",
        }
    }

    /// Minimum total score a proposal from this category must reach once it
    /// clears every gate.
    pub const fn pass_threshold(self) -> u8 {
        match self {
            EntityCategory::School => 70,
            EntityCategory::Department => 75,
        }
    }

    fn from_token(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "school" => Some(EntityCategory::School),
            "department" => Some(EntityCategory::Department),
            _ => None,
        }
    }
}

/// Declarative yes/no answer collected from the form. Anything other than an
/// explicit "yes" (including an empty field) counts as no.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YesNo {
    Yes,
    #[default]
    No,
}

impl YesNo {
    pub const fn is_yes(self) -> bool {
        matches!(self, YesNo::Yes)
    }

    fn from_token(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("yes") {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }
}

/// Declared impact level of the initiative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

impl ImpactLevel {
    fn from_token(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Some(ImpactLevel::Low),
            "medium" => Some(ImpactLevel::Medium),
            "high" => Some(ImpactLevel::High),
            _ => None,
        }
    }
}

/// The seven-field key-performance-indicator definition bundle, plus the
/// baseline date which is displayed but not part of the completeness set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KpiCard {
    pub name: String,
    pub formula: String,
    pub unit: String,
    pub baseline: String,
    pub baseline_date: String,
    pub target: String,
    pub source: String,
    pub frequency: String,
}

impl KpiCard {
    /// The fields counted for completeness. Baseline and target are treated
    /// as opaque text here: a non-numeric but non-empty value still counts.
    pub fn completeness_fields(&self) -> [&str; 7] {
        [
            &self.name,
            &self.formula,
            &self.unit,
            &self.baseline,
            &self.target,
            &self.source,
            &self.frequency,
        ]
    }

    pub fn filled_count(&self) -> usize {
        self.completeness_fields()
            .iter()
            .filter(|field| !field.is_empty())
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.filled_count() == self.completeness_fields().len()
    }
}

/// Raw proposal form payload as submitted. Every field arrives as free text;
/// missing fields deserialize to empty strings so a partial form can still be
/// screened.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProposalSubmission {
    #[serde(default)]
    pub entity_type: String,
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub org_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub kpi_name: String,
    #[serde(default)]
    pub kpi_formula: String,
    #[serde(default)]
    pub kpi_unit: String,
    #[serde(default)]
    pub kpi_baseline: String,
    #[serde(default)]
    pub kpi_baseline_date: String,
    #[serde(default)]
    pub kpi_target: String,
    #[serde(default)]
    pub kpi_source: String,
    #[serde(default)]
    pub kpi_frequency: String,
    #[serde(default)]
    pub non_routine: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    #[serde(default)]
    pub beneficiaries: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub reserve_fraction: String,
    #[serde(default)]
    pub risk_count: String,
    #[serde(default)]
    pub has_documents: String,
    #[serde(default)]
    pub has_signature: String,
    #[serde(default)]
    pub impact_level: String,
    #[serde(default)]
    pub team_ready: String,
    #[serde(default)]
    pub has_milestones: String,
    #[serde(default)]
    pub is_innovative: String,
}

impl ProposalSubmission {
    /// Apply every trim-and-default rule in one place so gates and scores
    /// never re-implement the fallbacks. Normalization is infallible: bad
    /// input degrades to the failing/zero value instead of erroring.
    pub fn normalize(&self) -> ProposalRecord {
        ProposalRecord {
            category: EntityCategory::from_token(&self.entity_type),
            sector: trimmed(&self.sector),
            org_name: trimmed(&self.org_name),
            title: trimmed(&self.title),
            code: trimmed(&self.code),
            goal: trimmed(&self.goal),
            kpi: KpiCard {
                name: trimmed(&self.kpi_name),
                formula: trimmed(&self.kpi_formula),
                unit: trimmed(&self.kpi_unit),
                baseline: trimmed(&self.kpi_baseline),
                baseline_date: trimmed(&self.kpi_baseline_date),
                target: trimmed(&self.kpi_target),
                source: trimmed(&self.kpi_source),
                frequency: trimmed(&self.kpi_frequency),
            },
            non_routine: YesNo::from_token(&self.non_routine),
            start: Period::parse(&self.start),
            end: Period::parse(&self.end),
            beneficiaries: non_negative_number(&self.beneficiaries),
            budget: non_negative_number(&self.budget),
            reserve_fraction: non_negative_number(&self.reserve_fraction),
            risk_count: non_negative_number(&self.risk_count),
            has_documents: YesNo::from_token(&self.has_documents),
            has_signature: YesNo::from_token(&self.has_signature),
            impact: ImpactLevel::from_token(&self.impact_level),
            team_ready: YesNo::from_token(&self.team_ready),
            has_milestones: YesNo::from_token(&self.has_milestones),
            is_innovative: YesNo::from_token(&self.is_innovative),
        }
    }
}

/// The normalized, immutable proposal record every gate and score reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalRecord {
    pub category: Option<EntityCategory>,
    pub sector: String,
    pub org_name: String,
    pub title: String,
    pub code: String,
    pub goal: String,
    pub kpi: KpiCard,
    pub non_routine: YesNo,
    pub start: Option<Period>,
    pub end: Option<Period>,
    pub beneficiaries: f64,
    pub budget: f64,
    pub reserve_fraction: f64,
    pub risk_count: f64,
    pub has_documents: YesNo,
    pub has_signature: YesNo,
    pub impact: Option<ImpactLevel>,
    pub team_ready: YesNo,
    pub has_milestones: YesNo,
    pub is_innovative: YesNo,
}

impl ProposalRecord {
    /// Signed month count of the schedule, 0 when either period is absent.
    pub fn schedule_months(&self) -> i32 {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start.months_until(&end),
            _ => 0,
        }
    }
}

fn trimmed(raw: &str) -> String {
    raw.trim().to_string()
}

// Missing data is worst-case input: unparsable, negative, or non-finite
// numerics collapse to zero.
fn non_negative_number(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}
