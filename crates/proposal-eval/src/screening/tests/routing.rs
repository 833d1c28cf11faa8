use super::common::*;
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use crate::screening::router::proposal_router;

async fn post_json(uri: &str, body: serde_json::Value) -> axum::response::Response {
    proposal_router()
        .oneshot(
            axum::http::Request::post(uri)
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .expect("route executes")
}

#[tokio::test]
async fn evaluate_endpoint_round_trips_a_passing_proposal() {
    let mut body = serde_json::to_value(complete_submission()).unwrap();
    body["evaluated_on"] = json!("2025-09-01");

    let response = post_json("/api/v1/proposals/evaluate", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["evaluated_on"], json!("2025-09-01"));
    assert_eq!(payload["gates"]["months"], json!(21));
    assert_eq!(payload["gates"]["verdict"], json!("passes"));
    assert_eq!(payload["scores"]["total"], json!(100));
    assert_eq!(payload["decision"]["status"], json!("passed"));
    assert_eq!(payload["decision"]["category"], json!("school"));
    assert_eq!(payload["decision_summary"], json!("passed (school)"));
}

#[tokio::test]
async fn evaluate_endpoint_reports_gate_rejections_with_scores() {
    let mut body = json!({ "entity_type": "department" });
    body["evaluated_on"] = json!("2025-09-01");

    let response = post_json("/api/v1/proposals/evaluate", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["gates"]["verdict"], json!("auto_rejected"));
    assert_eq!(payload["decision"]["status"], json!("rejected_by_gate"));
    // Score is still computed and reported even when gates reject.
    assert_eq!(payload["scores"]["cost_efficiency"], json!(5));
}

#[tokio::test]
async fn evaluate_endpoint_is_deterministic_for_a_fixed_date() {
    let mut body = serde_json::to_value(complete_submission()).unwrap();
    body["evaluated_on"] = json!("2026-01-15");

    let first = read_json_body(post_json("/api/v1/proposals/evaluate", body.clone()).await).await;
    let second = read_json_body(post_json("/api/v1/proposals/evaluate", body).await).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn explain_endpoint_returns_the_narrative() {
    let body = json!({});

    let response = post_json("/api/v1/proposals/explain", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["verdict"], json!("auto-rejected"));
    let text = payload["explanation"].as_str().expect("explanation text");
    assert!(text.contains("Gate verdict: auto-reject"));
    assert!(text.contains("Quick fixes:"));
}

#[tokio::test]
async fn documents_review_rejects_an_empty_upload() {
    for body in [json!({}), json!({ "files": [] })] {
        let response = post_json("/api/v1/proposals/documents/review", body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let payload = read_json_body(response).await;
        assert_eq!(payload["error"], json!("no files supplied"));
    }
}

#[tokio::test]
async fn documents_review_classifies_a_valid_upload() {
    let body = json!({
        "files": [
            { "name": "funding-decision.pdf", "media_type": "application/pdf", "size": 20480 },
            { "name": "site-visit.png", "media_type": "image/png", "size": 8192 }
        ]
    });

    let response = post_json("/api/v1/proposals/documents/review", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["ok"], json!(true));
    assert_eq!(payload["total_files"], json!(2));
    assert_eq!(payload["pdf_count"], json!(1));
    assert_eq!(payload["image_count"], json!(1));
    assert_eq!(payload["keyword_hits"], json!(1));
    assert_eq!(payload["items"][0]["keyword_hit"], json!(true));
}
