mod common;

use actix_web::{test, App};
use serde_json::json;
use serial_test::serial;

use common::TestApp;

#[actix_rt::test]
#[serial]
async fn test_root_banner() {
    let test_app = TestApp::new().await;
    let app = test::init_service(App::new().configure(|cfg| test_app.configure(cfg))).await;

    let req = test::TestRequest::get().uri("/").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = test::read_body(resp).await;
    assert_eq!(body, "Wanderpass API is running");
}

#[actix_rt::test]
#[serial]
async fn test_health_reports_every_service() {
    let test_app = TestApp::new().await;
    let app = test::init_service(App::new().configure(|cfg| test_app.configure(cfg))).await;

    let req = test::TestRequest::get().uri("/health").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;

    // "ok" with a database, "degraded" without one; never an error page.
    let status = body["status"].as_str().expect("status string");
    assert!(status == "ok" || status == "degraded");

    assert!(body["services"]["mongodb"]["status"].is_string());
    // Absent provider keys still report ok, they just run in fallback mode.
    assert_eq!(body["services"]["gemini"]["status"], "ok");
    assert_eq!(body["services"]["travel_buddy"]["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[actix_rt::test]
#[serial]
async fn test_passport_rankings_sorted_by_rank() {
    let test_app = TestApp::new().await;
    let app = test::init_service(App::new().configure(|cfg| test_app.configure(cfg))).await;

    let req = test::TestRequest::get().uri("/api/passports").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let rankings = body.as_array().expect("rankings array");
    assert_eq!(rankings.len(), 57);

    assert_eq!(rankings[0]["countryCode"], "JP");
    assert_eq!(rankings[0]["rank"], 1);
    assert_eq!(rankings[0]["mobilityScore"], 193);

    let ranks: Vec<i64> = rankings
        .iter()
        .map(|entry| entry["rank"].as_i64().expect("rank"))
        .collect();
    assert!(ranks.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[actix_rt::test]
#[serial]
async fn test_get_passport_ignores_case() {
    let test_app = TestApp::new().await;
    let app = test::init_service(App::new().configure(|cfg| test_app.configure(cfg))).await;

    let req = test::TestRequest::get().uri("/api/passports/jp").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["countryCode"], "JP");
    assert_eq!(body["rank"], 1);
    assert_eq!(body["mobilityScore"], 193);
    assert_eq!(body["countryName"], "Japan");
}

#[actix_rt::test]
#[serial]
async fn test_get_unknown_passport() {
    let test_app = TestApp::new().await;
    let app = test::init_service(App::new().configure(|cfg| test_app.configure(cfg))).await;

    let req = test::TestRequest::get().uri("/api/passports/XX").to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Passport not found");
}

#[actix_rt::test]
#[serial]
async fn test_top_hotels_without_model_serves_mock_tiers() {
    let test_app = TestApp::new().await;
    let app = test::init_service(App::new().configure(|cfg| test_app.configure(cfg))).await;

    let req = test::TestRequest::get()
        .uri("/api/ai/hotels?country=Japan")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["country"], "Japan");

    let hotels = body["hotels"].as_array().expect("hotels array");
    assert_eq!(hotels.len(), 5);
    assert_eq!(hotels[0]["name"], "Grand Japan Hotel");
    assert_eq!(hotels[0]["rating"], 5.0);
    assert_eq!(hotels[0]["pricePerNight"], 250.0);
    assert_eq!(hotels[0]["category"], "Luxury");
    assert_eq!(hotels[4]["name"], "Budget Stay Japan");
    assert_eq!(hotels[4]["category"], "Budget");
    assert!(hotels[0]["amenities"].as_array().is_some_and(|a| !a.is_empty()));
}

#[actix_rt::test]
#[serial]
async fn test_top_hotels_requires_country() {
    let test_app = TestApp::new().await;
    let app = test::init_service(App::new().configure(|cfg| test_app.configure(cfg))).await;

    let req = test::TestRequest::get().uri("/api/ai/hotels").to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Country parameter is required");

    // Whitespace-only values are rejected the same way.
    let req = test::TestRequest::get()
        .uri("/api/ai/hotels?country=%20%20")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
#[serial]
async fn test_register_rejects_invalid_email() {
    let test_app = TestApp::new().await;
    let app = test::init_service(App::new().configure(|cfg| test_app.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(&json!({
            "email": "not-an-email",
            "password": "password123"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid email address");
}
