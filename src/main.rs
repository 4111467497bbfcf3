use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use wanderpass_api::db;
use wanderpass_api::routes;
use wanderpass_api::services::country_service::CountryService;
use wanderpass_api::services::gemini_service::GeminiClient;
use wanderpass_api::services::hotel_service::HotelService;
use wanderpass_api::services::passport_service::PassportService;
use wanderpass_api::services::travel_buddy::TravelBuddyProvider;
use wanderpass_api::services::trip_planning_service::TripPlanner;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 3000;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);

    let mongo_uri = std::env::var("MONGODB_URI").expect("MONGODB_URI must be set");
    println!("Got MongoDB URI, attempting connection...");
    let client = db::mongo::create_mongo_client(&mongo_uri).await;
    db::mongo::ensure_indexes(&client).await;

    // Shared service handles. Each one carries its own configuration read
    // from the environment; a missing key means the service runs in its
    // fallback mode rather than failing startup.
    let gemini = GeminiClient::from_env();
    if gemini.is_none() {
        println!("GEMINI_API_KEY not set. Trip plans and hotel lookups will use mock data.");
    }
    let provider = TravelBuddyProvider::from_env();
    if provider.is_none() {
        println!("TRAVEL_BUDDY_API_KEY not set. Passport rankings will use fallback data.");
    }

    let countries = CountryService::new(client.clone());
    let passports = PassportService::new(provider);
    let planner = TripPlanner::new(countries.clone(), passports.clone(), gemini.clone());
    let hotels = HotelService::new(gemini);

    println!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(web::Data::new(client.clone()))
            .app_data(web::Data::new(countries.clone()))
            .app_data(web::Data::new(passports.clone()))
            .app_data(web::Data::new(planner.clone()))
            .app_data(web::Data::new(hotels.clone()))
            .configure(routes::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
