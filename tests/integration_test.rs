//! End-to-end scenarios against a running MongoDB with the seed data
//! loaded (`cargo run --bin seed`). Ignored by default; run them with
//! `cargo test -- --ignored` once the database is up.

mod common;

use actix_web::{http::header, test, App};
use serde_json::json;
use serial_test::serial;

use common::{cleanup_test_data, test_email, test_password, test_token, TestApp};

#[actix_rt::test]
#[serial]
#[ignore]
async fn test_full_api_integration() {
    let test_app = TestApp::new().await;
    cleanup_test_data(&test_app.client).await;

    let app = test::init_service(App::new().configure(|cfg| test_app.configure(cfg))).await;

    // Test 1: Health check reports a connected database
    let req = test::TestRequest::get().uri("/health").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["services"]["mongodb"]["status"], "ok");
    println!("✓ Health check passed");

    // Test 2: Register a new user
    let email = test_email();
    let password = test_password();

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(&json!({ "email": email, "password": password }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["token"].is_string());
    assert_eq!(body["user"]["email"], email.as_str());
    let user_id = body["user"]["id"].as_str().expect("user id").to_string();
    println!("✓ Registration passed");

    // Test 3: Duplicate registration is rejected
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(&json!({ "email": email, "password": password }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "User already exists");
    println!("✓ Duplicate registration rejected");

    // Test 4: Login with the same credentials
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(&json!({ "email": email, "password": password }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().expect("token").to_string();
    assert_eq!(body["user"]["id"], user_id.as_str());
    println!("✓ Login passed");

    // Test 5: Login with the wrong password
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(&json!({ "email": email, "password": "wrong-password" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid credentials");
    println!("✓ Wrong password rejected");

    // Test 6: Fetch own profile with the token
    let req = test::TestRequest::get()
        .uri("/api/users/me")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], user_id.as_str());
    assert_eq!(body["email"], email.as_str());
    assert!(body.get("passwordHash").is_none());
    println!("✓ Profile fetch passed");

    // Test 7: Update the profile, passport code gets normalized
    let req = test::TestRequest::put()
        .uri("/api/users/me")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .set_json(&json!({
            "fullName": "Test Traveler",
            "bio": "Chasing stamps.",
            "passportCode": "us"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["fullName"], "Test Traveler");
    assert_eq!(body["bio"], "Chasing stamps.");
    assert_eq!(body["passportCode"], "US");
    println!("✓ Profile update passed");

    // Test 8: Seeded country catalog
    let req = test::TestRequest::get().uri("/api/countries").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let countries = body.as_array().expect("countries array");
    assert!(countries.len() >= 240);
    assert!(countries.contains(&json!({ "code": "JP", "name": "Japan" })));
    println!("✓ Country catalog passed");

    // Test 9: Country details by code, case-insensitive
    let req = test::TestRequest::get().uri("/api/countries/jp").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "JP");
    assert_eq!(body["name"], "Japan");
    assert_eq!(body["region"], "Asia");
    assert!(body.get("_id").is_none());
    println!("✓ Country details passed");

    // Test 10: Stored visa rules, both directions of strictness
    let req = test::TestRequest::get()
        .uri("/api/countries/visa/US/JP")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["type"], "visa-free");
    assert_eq!(body["duration"], 90);

    let req = test::TestRequest::get()
        .uri("/api/countries/visa/MA/JP")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["type"], "visa-required");
    assert!(body.get("duration").is_none());
    println!("✓ Visa rules passed");

    // Test 11: A pair without a stored rule still answers
    let req = test::TestRequest::get()
        .uri("/api/countries/visa/QA/MA")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["type"], "unknown");
    assert!(body.get("duration").is_none());
    println!("✓ Unknown visa pair passed");

    // Test 12: Trip plan picks up the stored visa rule by country name
    let req = test::TestRequest::post()
        .uri("/api/ai/plan-trip")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .set_json(&json!({
            "from": "United States",
            "to": "Japan",
            "budget": 3000.0,
            "days": 5
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["from"], "United States");
    assert_eq!(body["destination"], "Japan");
    assert_eq!(body["visaRequired"], false);
    assert_eq!(
        body["visaWarning"],
        "Visa type: visa-free. Duration: up to 90 days."
    );
    assert_eq!(body["itinerary"].as_array().expect("itinerary").len(), 5);
    println!("✓ Trip planning passed");

    cleanup_test_data(&test_app.client).await;
}

#[actix_rt::test]
#[serial]
#[ignore]
async fn test_unknown_country_returns_404() {
    let test_app = TestApp::new().await;
    let app = test::init_service(App::new().configure(|cfg| test_app.configure(cfg))).await;

    let req = test::TestRequest::get().uri("/api/countries/ZZ").to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Country not found");
}

#[actix_rt::test]
#[serial]
#[ignore]
async fn test_plan_trip_with_iso_codes_uses_stored_rule() {
    let test_app = TestApp::new().await;
    let app = test::init_service(App::new().configure(|cfg| test_app.configure(cfg))).await;

    // ISO codes on both sides, resolved through the country catalog.
    let req = test::TestRequest::post()
        .uri("/api/ai/plan-trip")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", test_token())))
        .set_json(&json!({
            "from": "US",
            "to": "JP",
            "budget": 3500.0,
            "days": 7
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["from"], "United States");
    assert_eq!(body["destination"], "Japan");
    assert_eq!(body["totalCost"], 3500.0);
    assert_eq!(body["visaRequired"], false);

    let warning = body["visaWarning"].as_str().expect("visa warning");
    assert!(warning.contains("visa-free"));
    assert!(warning.contains("90"));

    let itinerary = body["itinerary"].as_array().expect("itinerary");
    assert_eq!(itinerary.len(), 7);
    assert_eq!(itinerary[0]["title"], "Arrival in Japan");
    assert_eq!(itinerary[6]["title"], "Departure Day");

    // floor(3500 / 7) = 500 per day
    for day in itinerary {
        assert_eq!(day["totalDayCost"], 500.0);
    }
    println!("✓ Code-based trip planning passed");
}

#[actix_rt::test]
#[serial]
#[ignore]
async fn test_plan_trip_maps_country_name_to_stored_rule() {
    let test_app = TestApp::new().await;
    let app = test::init_service(App::new().configure(|cfg| test_app.configure(cfg))).await;

    // "Morocco" goes through name lookup and still finds the MA rule;
    // "QA" comes back as the display name Qatar. No days given, so the
    // plan runs the default length.
    let req = test::TestRequest::post()
        .uri("/api/ai/plan-trip")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", test_token())))
        .set_json(&json!({
            "from": "Morocco",
            "to": "QA",
            "budget": 1800.0
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["from"], "Morocco");
    assert_eq!(body["destination"], "Qatar");
    assert_eq!(body["days"], 5);
    assert_eq!(body["visaRequired"], false);
    assert_eq!(
        body["visaWarning"],
        "Visa type: visa-free. Duration: up to 30 days."
    );
    assert_eq!(body["itinerary"].as_array().expect("itinerary").len(), 5);
    println!("✓ Name-based trip planning passed");
}
