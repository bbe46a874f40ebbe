use axum_test::TestServer;
use serde_json::json;

use voyagesense_api::api::{create_router, AppState};
use voyagesense_api::db::Cache;
use voyagesense_api::engine::Engine;
use voyagesense_api::models::{BudgetBucket, Destination, DurationBucket};
use voyagesense_api::services::{NarrativeService, VlogService};

fn test_destination(
    id: i32,
    name: &str,
    kind: &str,
    duration_bucket: DurationBucket,
    budget_bucket: BudgetBucket,
    google_rating: f64,
    weekly_off: Option<&str>,
) -> Destination {
    Destination {
        id,
        name: name.to_string(),
        zone: "Southern".to_string(),
        state: "Kerala".to_string(),
        city: "Kochi".to_string(),
        kind: kind.to_string(),
        significance: kind.to_string(),
        time_needed_hrs: 2.0,
        duration_bucket,
        entrance_fee: 0.0,
        budget_bucket,
        google_rating,
        sentiment_score: 0.9,
        review_count: 8,
        sample_reviews: Some("Amazing sunrise. Best tea tasting.".to_string()),
        best_time_to_visit: Some("Winter".to_string()),
        weekly_off: weekly_off.map(str::to_string),
    }
}

fn test_catalog() -> Vec<Destination> {
    vec![
        test_destination(
            1,
            "Munnar Tea Gardens",
            "Nature",
            DurationBucket::Short,
            BudgetBucket::Free,
            4.9,
            None,
        ),
        test_destination(
            2,
            "Mysore Palace",
            "Historical",
            DurationBucket::Long,
            BudgetBucket::High,
            4.0,
            Some("Monday"),
        ),
    ]
}

/// Server wired against an in-memory catalog and unreachable collaborator
/// endpoints, so external lookups exercise the fallback paths.
fn create_test_server() -> TestServer {
    let engine = Engine::new(test_catalog());
    let cache = Cache::new(redis::Client::open("redis://127.0.0.1:1").unwrap());
    let narrative = NarrativeService::new(
        "test_key".to_string(),
        "http://127.0.0.1:1".to_string(),
        "test-model".to_string(),
    );
    let vlogs = VlogService::new(
        cache,
        "test_key".to_string(),
        "http://127.0.0.1:1".to_string(),
    );

    let state = AppState::new(engine, narrative, vlogs);
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_recommendations_ranked_and_explained() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({
            "profile": {
                "type": "Nature",
                "significance": "Nature",
                "duration_bucket": "Short",
                "budget_bucket": "Low",
                "job_type": "Flexible"
            }
        }))
        .await;

    response.assert_status_ok();
    let results: Vec<serde_json::Value> = response.json();

    // Mysore Palace is dropped by the Low-budget constraint.
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["name"], "Munnar Tea Gardens");
    assert_eq!(results[0]["type"], "Nature");
    assert!(results[0]["match_score"].as_f64().unwrap() > 0.0);

    let explanation = results[0]["explanation"].as_str().unwrap();
    assert!(explanation.contains("interest"));
    assert!(explanation.contains("is budget-friendly (Free)"));
}

#[tokio::test]
async fn test_recommendations_empty_profile_is_ok() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({ "profile": {} }))
        .await;

    response.assert_status_ok();
    let results: Vec<serde_json::Value> = response.json();
    assert_eq!(results.len(), 2);
    // The ideal numeric defaults still favour the better-rated entry.
    assert_eq!(results[0]["name"], "Munnar Tea Gardens");
}

#[tokio::test]
async fn test_recommendations_unknown_profile_keys_ignored() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({
            "profile": {
                "type": "Nature",
                "favourite_color": "teal",
                "season": "Winter"
            },
            "top_n": 1
        }))
        .await;

    response.assert_status_ok();
    let results: Vec<serde_json::Value> = response.json();
    assert_eq!(results.len(), 1);
}

#[tokio::test]
async fn test_recommendations_no_match_returns_empty_list() {
    let server = create_test_server();

    // Fixed Schedule + Medium duration matches nothing in the catalog.
    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({
            "profile": {
                "job_type": "Fixed Schedule",
                "duration_bucket": "Medium"
            }
        }))
        .await;

    response.assert_status_ok();
    let results: Vec<serde_json::Value> = response.json();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_recommendations_visit_day_excludes_closed() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({
            "profile": { "visit_day": "Monday" }
        }))
        .await;

    response.assert_status_ok();
    let results: Vec<serde_json::Value> = response.json();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["name"], "Munnar Tea Gardens");
}

#[tokio::test]
async fn test_vlogs_fall_back_to_placeholders() {
    let server = create_test_server();

    let response = server.get("/api/v1/destinations/1/vlogs").await;
    response.assert_status_ok();

    let vlogs: Vec<serde_json::Value> = response.json();
    assert_eq!(vlogs.len(), 2);
    assert!(vlogs[0]["title"]
        .as_str()
        .unwrap()
        .contains("Munnar Tea Gardens"));
}

#[tokio::test]
async fn test_vlogs_unknown_destination_is_404() {
    let server = create_test_server();
    let response = server.get("/api/v1/destinations/999/vlogs").await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_narrative_falls_back_on_collaborator_failure() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/destinations/1/narrative")
        .json(&json!({ "type": "Nature", "budget_bucket": "Low" }))
        .await;

    // Collaborator is unreachable; the endpoint still answers 200 with the
    // fixed fallback text.
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(!body["narrative"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_narrative_unknown_destination_is_404() {
    let server = create_test_server();
    let response = server
        .post("/api/v1/destinations/42/narrative")
        .json(&json!({}))
        .await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}
