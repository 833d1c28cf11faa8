//! Bulk proposal intake from CSV exports of the submission form.

use std::io::Read;
use std::path::Path;

use super::domain::ProposalSubmission;

/// Boundary error for batch intake. CSV problems are reported once at the
/// reader; they never reach the evaluation pipeline.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("failed to read proposal export: {0}")]
    Csv(#[from] csv::Error),
}

/// Parse proposal rows from a CSV export. Column headers match the
/// submission field names; missing columns deserialize as empty fields, so
/// partial exports still screen (and fail gates the normal way).
pub fn read_submissions<R: Read>(reader: R) -> Result<Vec<ProposalSubmission>, IntakeError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut submissions = Vec::new();
    for row in csv_reader.deserialize::<ProposalSubmission>() {
        submissions.push(row?);
    }

    Ok(submissions)
}

/// Convenience wrapper reading an export from disk.
pub fn read_submissions_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<ProposalSubmission>, IntakeError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut submissions = Vec::new();
    for row in reader.deserialize::<ProposalSubmission>() {
        submissions.push(row?);
    }

    Ok(submissions)
}
