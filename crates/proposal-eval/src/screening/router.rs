use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::documents::{self, DocumentReview, FileDescriptor};
use super::domain::ProposalSubmission;
use super::evaluation::{evaluate, Decision, GateReport, ScoreReport};
use super::explanation;

/// Router builder exposing the screening endpoints.
pub fn proposal_router() -> Router {
    Router::new()
        .route("/api/v1/proposals/evaluate", post(evaluate_handler))
        .route("/api/v1/proposals/explain", post(explain_handler))
        .route(
            "/api/v1/proposals/documents/review",
            post(documents_review_handler),
        )
}

#[derive(Debug, Deserialize)]
pub(crate) struct EvaluateRequest {
    #[serde(flatten)]
    pub(crate) submission: ProposalSubmission,
    /// Evaluation date stamped on the response (defaults to today). Fixing
    /// it makes responses reproducible for audits and tests.
    #[serde(default)]
    pub(crate) evaluated_on: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub(crate) struct EvaluateResponse {
    pub(crate) evaluated_on: NaiveDate,
    pub(crate) gates: GateReport,
    pub(crate) scores: ScoreReport,
    pub(crate) decision: Decision,
    pub(crate) decision_summary: String,
}

pub(crate) async fn evaluate_handler(
    Json(request): Json<EvaluateRequest>,
) -> Json<EvaluateResponse> {
    let record = request.submission.normalize();
    let outcome = evaluate(&record);
    let evaluated_on = request
        .evaluated_on
        .unwrap_or_else(|| Local::now().date_naive());

    Json(EvaluateResponse {
        evaluated_on,
        gates: outcome.gates,
        scores: outcome.scores,
        decision_summary: outcome.decision.summary(),
        decision: outcome.decision,
    })
}

#[derive(Debug, Serialize)]
pub(crate) struct ExplainResponse {
    pub(crate) verdict: &'static str,
    pub(crate) explanation: String,
}

pub(crate) async fn explain_handler(
    Json(submission): Json<ProposalSubmission>,
) -> Json<ExplainResponse> {
    let record = submission.normalize();
    let gates = super::evaluation::evaluate_gates(&record);
    let explanation = explanation::narrate(&record, &gates);

    Json(ExplainResponse {
        verdict: gates.verdict.label(),
        explanation,
    })
}

#[derive(Debug, Deserialize)]
pub(crate) struct DocumentsReviewRequest {
    #[serde(default)]
    pub(crate) files: Vec<FileDescriptor>,
}

pub(crate) async fn documents_review_handler(
    Json(request): Json<DocumentsReviewRequest>,
) -> Response {
    if request.files.is_empty() {
        let payload = json!({ "error": "no files supplied" });
        return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
    }

    let review: DocumentReview = documents::review(&request.files);
    (StatusCode::OK, Json(review)).into_response()
}
