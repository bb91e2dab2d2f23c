mod common;

use actix_web::test;
use serde_json::json;

use common::{create_app, planner, spawn_stub_planner, UNREACHABLE_PLANNER_URL};

#[actix_web::test]
async fn generate_falls_back_when_planner_is_unreachable() {
    let app = test::init_service(create_app(planner(Some(UNREACHABLE_PLANNER_URL)))).await;

    let req = test::TestRequest::post()
        .uri("/api/itineraries/generate")
        .set_json(&json!({
            "destination": "Tokyo",
            "days": 2,
            "preferences": ["culture", "food"]
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["source"], "fallback");
    assert_eq!(body["status"], "completed");
    assert!(!body["run_id"].as_str().unwrap().is_empty());
    assert_eq!(body["itinerary"]["title"], "2-Day Tokyo Adventure");

    let daily_plans = body["itinerary"]["daily_plans"].as_array().unwrap();
    assert_eq!(daily_plans.len(), 2);
    assert_eq!(daily_plans[0]["day"], 1);
    assert_eq!(daily_plans[0]["theme"], "Culture");
    assert_eq!(daily_plans[1]["theme"], "Food");
    assert_eq!(daily_plans[0]["activities"].as_array().unwrap().len(), 4);
}

#[actix_web::test]
async fn generate_falls_back_when_planner_returns_server_error() {
    let base = spawn_stub_planner("HTTP/1.1 500 Internal Server Error", "{}");
    let app = test::init_service(create_app(planner(Some(base.as_str())))).await;

    let req = test::TestRequest::post()
        .uri("/api/itineraries/generate")
        .set_json(&json!({ "destination": "Tokyo", "days": 1 }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["source"], "fallback");
    assert_eq!(body["itinerary"]["title"], "1-Day Tokyo Adventure");
}

#[actix_web::test]
async fn generate_falls_back_when_planner_run_fails() {
    let base = spawn_stub_planner(
        "HTTP/1.1 200 OK",
        r#"{"run_id":"r1","tour":{},"cost":{},"citations":[],"status":"failed"}"#,
    );
    let app = test::init_service(create_app(planner(Some(base.as_str())))).await;

    let req = test::TestRequest::post()
        .uri("/api/itineraries/generate")
        .set_json(&json!({ "destination": "Tokyo", "days": 1, "preferences": ["nature"] }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["source"], "fallback");
    assert_eq!(body["status"], "completed");
    assert_eq!(body["itinerary"]["daily_plans"][0]["theme"], "Nature");
}

#[actix_web::test]
async fn generate_falls_back_when_planner_is_not_configured() {
    let app = test::init_service(create_app(planner(None))).await;

    let req = test::TestRequest::post()
        .uri("/api/itineraries/generate")
        .set_json(&json!({
            "destination": "Lisbon",
            "country": "Portugal",
            "days": 3
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["source"], "fallback");
    // No preferences selected defaults to culture and food.
    assert!(body["itinerary"]["description"]
        .as_str()
        .unwrap()
        .contains("culture, food"));
}

#[actix_web::test]
async fn generate_rejects_empty_destination() {
    let app = test::init_service(create_app(planner(None))).await;

    let req = test::TestRequest::post()
        .uri("/api/itineraries/generate")
        .set_json(&json!({ "destination": "  ", "days": 3 }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn generate_rejects_out_of_range_days() {
    let app = test::init_service(create_app(planner(None))).await;

    for days in [0, -1, 31] {
        let req = test::TestRequest::post()
            .uri("/api/itineraries/generate")
            .set_json(&json!({ "destination": "Tokyo", "days": days }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400, "days = {}", days);
    }
}

#[actix_web::test]
async fn refine_returns_service_unavailable_without_planner() {
    let app = test::init_service(create_app(planner(Some(UNREACHABLE_PLANNER_URL)))).await;

    let req = test::TestRequest::post()
        .uri("/api/itineraries/refine")
        .set_json(&json!({
            "run_id": "run-123",
            "current_itinerary": { "title": "3-Day Tokyo Adventure" },
            "refinement": "Make day 2 less busy"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 503);
}

#[actix_web::test]
async fn refine_rejects_empty_refinement() {
    let app = test::init_service(create_app(planner(None))).await;

    let req = test::TestRequest::post()
        .uri("/api/itineraries/refine")
        .set_json(&json!({
            "run_id": "run-123",
            "current_itinerary": {},
            "refinement": ""
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn preferences_endpoint_lists_all_tags() {
    let app = test::init_service(create_app(planner(None))).await;

    let req = test::TestRequest::get().uri("/api/preferences").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let tags: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["tag"].as_str().unwrap())
        .collect();
    assert_eq!(
        tags,
        vec!["adventure", "culture", "food", "relaxation", "nature", "shopping"]
    );
}
