//! Route-level tests driving the router with in-memory artifacts

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use leadscore_api::{app, AppState};
use leadscore_domain::{ClassifierInsight, Intent, Lead, Offer};
use leadscore_scoring::{Classification, IntentClassifier, ScoringPipeline};
use leadscore_storage::{ArtifactStore, MemoryStore};
use serde_json::{json, Value};
use tower::ServiceExt;

const BOUNDARY: &str = "leadscore-test-boundary";

const LEADS_CSV: &str = "name,role,company,industry,location,linkedin_bio\n\
Ava Patel,Head of Growth,FlowMetrics,B2B SaaS,Berlin,Scaling outbound\n\
Ben Ortiz,Intern,Acme,Retail,Lisbon,Learning the ropes\n";

/// High intent for decision makers, fallback for everyone else
struct RoleClassifier;

#[async_trait]
impl IntentClassifier for RoleClassifier {
    async fn classify(&self, _offer: &Offer, lead: &Lead) -> Classification {
        if lead.role.contains("Head") {
            Classification::Classified(ClassifierInsight::new(Intent::High, "Decision maker in ICP."))
        } else {
            Classification::fallback()
        }
    }
}

fn test_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let pipeline = ScoringPipeline::new(Arc::new(RoleClassifier), store.clone());
    (app(AppState::new(Arc::new(pipeline))), store)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn upload(field: &str, csv: &str) -> Request<Body> {
    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"{field}\"; filename=\"leads.csv\"\r\n\
         Content-Type: text/csv\r\n\r\n\
         {csv}\r\n\
         --{BOUNDARY}--\r\n"
    );
    Request::post("/api/leads/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn offer_json() -> Value {
    json!({
        "name": "AI Outreach Automation",
        "value_props": ["24/7 outreach", "6x more meetings"],
        "ideal_use_cases": ["B2B SaaS mid-market"]
    })
}

#[tokio::test]
async fn test_root_banner() {
    let (app, _) = test_app();
    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"Scoring Engine is running!");
}

#[tokio::test]
async fn test_health() {
    let (app, _) = test_app();
    let (status, body) = send_json(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime"].is_u64());
}

#[tokio::test]
async fn test_save_offer() {
    let (app, store) = test_app();

    let (status, body) = send_json(&app, post_json("/api/offer", offer_json())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Offer details saved.");
    let offer = store.get_offer().await.unwrap();
    assert_eq!(offer.value_props.len(), 2);
}

#[tokio::test]
async fn test_offer_without_lists_is_accepted() {
    let (app, store) = test_app();
    let (status, _) = send_json(&app, post_json("/api/offer", json!({"name": "Pipeline Pro"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(store.get_offer().await.unwrap().ideal_use_cases.is_empty());
}

#[tokio::test]
async fn test_invalid_offer_is_rejected() {
    let (app, _) = test_app();

    let (status, body) = send_json(&app, post_json("/api/offer", json!({"value_props": []}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "bad_request");

    let (status, body) = send_json(&app, post_json("/api/offer", json!({"name": "  "}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "validation_error");
}

#[tokio::test]
async fn test_upload_leads() {
    let (app, store) = test_app();

    let (status, body) = send_json(&app, upload("leadsFile", LEADS_CSV)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "2 leads uploaded successfully.");
    let leads = store.get_leads().await.unwrap();
    assert_eq!(leads[0].name, "Ava Patel");
    assert_eq!(leads[1].name, "Ben Ortiz");
}

#[tokio::test]
async fn test_upload_without_file() {
    let (app, _) = test_app();

    let (status, body) = send_json(&app, upload("otherField", LEADS_CSV)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "No file uploaded.");

    let (status, body) = send_json(&app, post_json("/api/leads/upload", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "No file uploaded.");
}

#[tokio::test]
async fn test_score_requires_offer_and_leads() {
    let (app, _) = test_app();

    let (status, body) = send_json(&app, Request::post("/api/score").body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "precondition_failed");
}

#[tokio::test]
async fn test_results_before_scoring() {
    let (app, _) = test_app();

    let (status, body) = send_json(&app, get("/api/results")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"]["message"],
        "Results not found. Run the scoring process first."
    );

    let (status, _) = send_json(&app, get("/api/results/export")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_full_flow() {
    let (app, _) = test_app();

    send_json(&app, post_json("/api/offer", offer_json())).await;
    send_json(&app, upload("leadsFile", LEADS_CSV)).await;

    let (status, body) = send_json(&app, Request::post("/api/score").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Scoring complete. Results are ready.");
    assert_eq!(body["scored"], 2);
    assert_eq!(body["fallbacks"], 1);

    let (status, results) = send_json(&app, get("/api/results")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(results[0]["name"], "Ava Patel");
    assert_eq!(results[0]["intent"], "High");
    assert_eq!(results[0]["score"], 100);
    assert_eq!(results[1]["intent"], "Low");
    // Intern in retail with a complete profile: 10 rule points + 10 fallback
    assert_eq!(results[1]["score"], 20);

    let response = app.clone().oneshot(get("/api/results/export")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"results.csv\""
    );
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let csv = String::from_utf8(body.to_vec()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "name,role,company,intent,score,reasoning");
    assert!(lines[1].starts_with("Ava Patel,Head of Growth,FlowMetrics,High,100,"));
    assert_eq!(lines.len(), 3);
}

#[tokio::test]
async fn test_cors_headers_present() {
    let (app, _) = test_app();
    let request = Request::get("/health")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();

    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
