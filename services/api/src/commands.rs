use chrono::{Local, NaiveDate};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

use proposal_eval::error::AppError;
use proposal_eval::screening::{
    documents, evaluate, explanation, read_submissions_from_path, Decision, EvaluationOutcome,
    FileDescriptor, Gate, ProposalRecord, ProposalSubmission,
};

#[derive(Args, Debug, Default)]
pub(crate) struct EvaluateArgs {
    /// Proposal submission as a JSON file. Defaults to a built-in sample.
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Evaluation date stamped on the output (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) evaluated_on: Option<NaiveDate>,
    /// Also print the narrative explanation
    #[arg(long)]
    pub(crate) explain: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export of proposal submissions (headers match the form fields)
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct DocumentsReviewArgs {
    /// Files to check; media types are inferred from the file names
    #[arg(required = true)]
    pub(crate) files: Vec<PathBuf>,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        input,
        evaluated_on,
        explain,
    } = args;

    let (submission, source) = match input {
        Some(path) => (load_submission(&path)?, format!("{}", path.display())),
        None => (sample_submission(), "built-in sample".to_string()),
    };

    let evaluated_on = evaluated_on.unwrap_or_else(|| Local::now().date_naive());
    let record = submission.normalize();
    let outcome = evaluate(&record);

    println!("Proposal screening ({source}, evaluated {evaluated_on})");
    render_outcome(&record, &outcome);

    if explain {
        println!("\nNarrative");
        for line in explanation::narrate(&record, &outcome.gates).lines() {
            println!("  {line}");
        }
    }

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let submissions = read_submissions_from_path(&args.csv)?;

    println!(
        "Screening {} proposal(s) from {}",
        submissions.len(),
        args.csv.display()
    );

    let mut passed = 0usize;
    let mut rejected = 0usize;
    let mut undetermined = 0usize;

    for (index, submission) in submissions.iter().enumerate() {
        let record = submission.normalize();
        let outcome = evaluate(&record);

        match outcome.decision {
            Decision::Passed { .. } => passed += 1,
            Decision::Undetermined => undetermined += 1,
            Decision::RejectedByGate | Decision::RejectedBelowThreshold { .. } => rejected += 1,
        }

        println!(
            "- row {:>3} | {} | gates {} | score {:>3} | {}",
            index + 1,
            row_label(&record),
            outcome.gates.verdict.label(),
            outcome.scores.total,
            outcome.decision.summary()
        );
    }

    println!("\nPassed {passed} | Rejected {rejected} | Undetermined {undetermined}");
    Ok(())
}

pub(crate) fn run_documents_review(args: DocumentsReviewArgs) -> Result<(), AppError> {
    let files: Vec<FileDescriptor> = args.files.iter().map(|path| describe_file(path)).collect();

    let review = documents::review(&files);

    println!("Supporting document review");
    for item in &review.items {
        println!(
            "- {} | {} | {} bytes | keyword hit: {}",
            item.name,
            if item.media_type.is_empty() {
                "unknown type"
            } else {
                item.media_type.as_str()
            },
            item.size,
            item.keyword_hit
        );
    }

    println!();
    for check in &review.checks {
        let mark = if check.pass { "pass" } else { "FAIL" };
        println!("[{mark}] {} ({})", check.rule, check.info);
    }

    if review.ok {
        println!("\nVerdict: ok. Mark supporting documents as attached and re-evaluate.");
    } else {
        println!("\nVerdict: not sufficient yet.");
    }

    Ok(())
}

fn load_submission(path: &Path) -> Result<ProposalSubmission, AppError> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|err| {
        AppError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("invalid proposal JSON in {}: {err}", path.display()),
        ))
    })
}

fn describe_file(path: &Path) -> FileDescriptor {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let media_type = mime_guess::from_path(path)
        .first_raw()
        .unwrap_or_default()
        .to_string();
    let size = fs::metadata(path).map(|meta| meta.len()).unwrap_or(0);

    FileDescriptor {
        name,
        media_type,
        size,
    }
}

fn row_label(record: &ProposalRecord) -> String {
    match (record.org_name.is_empty(), record.title.is_empty()) {
        (false, false) => format!("{}: {}", record.org_name, record.title),
        (false, true) => record.org_name.clone(),
        (true, false) => record.title.clone(),
        (true, true) => "(unnamed proposal)".to_string(),
    }
}

fn render_outcome(record: &ProposalRecord, outcome: &EvaluationOutcome) {
    println!("\nGates ({} month span)", outcome.gates.months);
    for gate in Gate::ALL {
        let mark = if outcome.gates.passed(gate) {
            "pass"
        } else {
            "FAIL"
        };
        println!("  [{mark}] {}", gate.label());
    }
    println!("  Aggregate: {}", outcome.gates.verdict.label());

    let scores = &outcome.scores;
    println!("\nScores");
    println!("  alignment        {:>3} / 20", scores.alignment);
    println!("  kpi quality      {:>3} / 20", scores.kpi_quality);
    println!("  impact           {:>3} / 20", scores.impact);
    println!("  feasibility      {:>3} / 15", scores.feasibility);
    println!("  cost efficiency  {:>3} / 10", scores.cost_efficiency);
    println!("  risk compliance  {:>3} / 10", scores.risk_compliance);
    println!("  innovation       {:>3} /  5", scores.innovation);
    println!("  total            {:>3} / 100", scores.total);

    let category_note = record
        .category
        .map(|category| format!("{} threshold {}", category.label(), category.pass_threshold()))
        .unwrap_or_else(|| "no category supplied".to_string());
    println!("\nDecision: {} ({category_note})", outcome.decision.summary());
}

fn sample_submission() -> ProposalSubmission {
    ProposalSubmission {
        entity_type: "school".to_string(),
        sector: "Primary Education".to_string(),
        org_name: "Riverside Primary School".to_string(),
        title: "Early Numeracy Acceleration".to_string(),
        code: "INIT-2026-021".to_string(),
        goal: "Goal 1".to_string(),
        kpi_name: "Numeracy proficiency rate".to_string(),
        kpi_formula: "proficient pupils / assessed pupils".to_string(),
        kpi_unit: "%".to_string(),
        kpi_baseline: "58".to_string(),
        kpi_baseline_date: "05/2026".to_string(),
        kpi_target: "72".to_string(),
        kpi_source: "assessment platform".to_string(),
        kpi_frequency: "monthly".to_string(),
        non_routine: "yes".to_string(),
        start: "09/2026".to_string(),
        end: "06/2028".to_string(),
        beneficiaries: "180".to_string(),
        budget: "36000".to_string(),
        reserve_fraction: "0.10".to_string(),
        risk_count: "4".to_string(),
        has_documents: "yes".to_string(),
        has_signature: "yes".to_string(),
        impact_level: "high".to_string(),
        team_ready: "yes".to_string(),
        has_milestones: "yes".to_string(),
        is_innovative: "yes".to_string(),
    }
}
