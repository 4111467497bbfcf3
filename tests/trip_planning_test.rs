use std::sync::Arc;
use std::time::Duration;

use mongodb::options::ClientOptions;
use mongodb::Client;
use serial_test::serial;

use wanderpass_api::services::country_service::CountryService;
use wanderpass_api::services::hotel_service::HotelService;
use wanderpass_api::services::passport_service::PassportService;
use wanderpass_api::services::travel_buddy::TravelBuddyProvider;

#[actix_rt::test]
#[serial]
async fn test_rankings_without_provider_use_fallback_table() {
    let service = PassportService::new(None);

    let rankings = service.get_passport_ranking().await;
    assert_eq!(rankings.len(), 57);
    assert_eq!(rankings[0].country_code, "JP");
    assert_eq!(rankings[0].rank, 1);

    assert!(rankings.windows(2).all(|pair| pair[0].rank <= pair[1].rank));

    let morocco = rankings
        .iter()
        .find(|entry| entry.country_code == "MA")
        .expect("Morocco in fallback table");
    assert_eq!(morocco.rank, 73);
    assert_eq!(morocco.mobility_score, 67);
}

#[actix_rt::test]
#[serial]
async fn test_rankings_survive_unreachable_provider() {
    // Port 9 is the discard port; the connection is refused immediately
    // and the service falls back to the static table.
    let provider = TravelBuddyProvider::new("tb_test_key").with_base_url("http://127.0.0.1:9");
    let service = PassportService::new(Some(provider));

    let rankings = service.get_passport_ranking().await;
    assert_eq!(rankings.len(), 57);
    assert_eq!(rankings[0].country_code, "JP");
}

#[actix_rt::test]
#[serial]
async fn test_visa_check_needs_provider() {
    let service = PassportService::new(None);

    let info = service.check_visa_requirements("US", "JP").await;
    assert!(info.is_none());
}

#[actix_rt::test]
#[serial]
async fn test_visa_check_survives_unreachable_provider() {
    let provider = TravelBuddyProvider::new("tb_test_key").with_base_url("http://127.0.0.1:9");
    let service = PassportService::new(Some(provider));

    let info = service.check_visa_requirements("US", "JP").await;
    assert!(info.is_none());
}

#[actix_rt::test]
#[serial]
async fn test_passport_lookup_ignores_case() {
    let service = PassportService::new(None);

    let germany = service
        .get_passport_by_code("de")
        .await
        .expect("Germany in fallback table");
    assert_eq!(germany.country_code, "DE");
    assert_eq!(germany.rank, 2);
    assert_eq!(germany.mobility_score, 192);

    assert!(service.get_passport_by_code("zz").await.is_none());
}

#[actix_rt::test]
#[serial]
async fn test_hotels_without_model_use_mock_tiers() {
    let service = HotelService::new(None);

    let response = service.top_hotels("Iceland").await;
    assert_eq!(response.country, "Iceland");
    assert_eq!(response.hotels.len(), 5);
    assert_eq!(response.hotels[0].name, "Grand Iceland Hotel");
    assert_eq!(response.hotels[0].category, "Luxury");
    assert_eq!(response.hotels[4].name, "Budget Stay Iceland");
    assert_eq!(response.hotels[4].price_per_night, 60.0);
}

#[actix_rt::test]
#[serial]
async fn test_visa_rule_lookup_surfaces_database_errors() {
    // Discard port again, this time for the database. Both sides of the
    // concurrent passport/country lookup fail fast, and the failure must
    // come back as an error rather than {type: "unknown"}.
    let mut options = ClientOptions::parse("mongodb://127.0.0.1:9")
        .await
        .expect("Failed to parse MongoDB URI");
    options.connect_timeout = Some(Duration::from_secs(1));
    options.server_selection_timeout = Some(Duration::from_secs(1));
    let client = Client::with_options(options).expect("Failed to create MongoDB client");

    let service = CountryService::new(Arc::new(client));
    assert!(service.get_visa_rule("US", "JP").await.is_err());
}
