use std::sync::Arc;
use std::time::Duration;

use actix_web::web;
use mongodb::bson::oid::ObjectId;
use mongodb::options::ClientOptions;
use mongodb::Client;

use wanderpass_api::routes;
use wanderpass_api::services::country_service::CountryService;
use wanderpass_api::services::hotel_service::HotelService;
use wanderpass_api::services::passport_service::PassportService;
use wanderpass_api::services::trip_planning_service::TripPlanner;

pub struct TestApp {
    pub client: Arc<Client>,
}

impl TestApp {
    pub async fn new() -> Self {
        let mongo_uri = std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        // Short timeouts so endpoints that touch an absent database fail
        // fast instead of holding every test on server selection.
        let mut options = ClientOptions::parse(&mongo_uri)
            .await
            .expect("Failed to parse MongoDB URI");
        options.connect_timeout = Some(Duration::from_secs(2));
        options.server_selection_timeout = Some(Duration::from_secs(2));

        let client = Client::with_options(options).expect("Failed to create MongoDB client");

        Self {
            client: Arc::new(client),
        }
    }

    /// Installs the same data and route tree the server runs, minus the
    /// external providers: passport rankings come from the fallback
    /// table, trip plans and hotels from mock data.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        let countries = CountryService::new(self.client.clone());
        let passports = PassportService::new(None);
        let planner = TripPlanner::new(countries.clone(), passports.clone(), None);
        let hotels = HotelService::new(None);

        cfg.app_data(web::Data::new(self.client.clone()))
            .app_data(web::Data::new(countries))
            .app_data(web::Data::new(passports))
            .app_data(web::Data::new(planner))
            .app_data(web::Data::new(hotels));

        routes::configure(cfg);
    }
}

/// Unique address per call so reruns never collide with leftover rows.
pub fn test_email() -> String {
    format!("test-{}@example.com", ObjectId::new().to_hex())
}

pub fn test_password() -> String {
    "testpassword123".to_string()
}

/// Token for an arbitrary user id, signed the same way the auth routes
/// sign theirs.
pub fn test_token() -> String {
    wanderpass_api::routes::auth::generate_token("test@example.com", ObjectId::new())
        .expect("Failed to sign test token")
}

pub async fn cleanup_test_data(client: &Client) {
    let users = client
        .database("Account")
        .collection::<mongodb::bson::Document>("Users");
    let _ = users
        .delete_many(mongodb::bson::doc! {"email": {"$regex": "^test-.*@example\\.com$"}})
        .await;
}
