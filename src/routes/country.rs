use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::services::country_service::CountryService;
use crate::services::passport_service::PassportService;

pub async fn list_countries(service: web::Data<CountryService>) -> impl Responder {
    match service.list_countries().await {
        Ok(countries) => HttpResponse::Ok().json(countries),
        Err(err) => {
            eprintln!("Failed to fetch countries: {:?}", err);
            HttpResponse::InternalServerError().json(json!({ "error": "Failed to fetch countries" }))
        }
    }
}

pub async fn get_country(
    service: web::Data<CountryService>,
    path: web::Path<String>,
) -> impl Responder {
    let code = path.into_inner();

    match service.get_country_by_code(&code).await {
        Ok(Some(country)) => HttpResponse::Ok().json(country),
        Ok(None) => HttpResponse::NotFound().json(json!({ "error": "Country not found" })),
        Err(err) => {
            eprintln!("Failed to fetch country {}: {:?}", code, err);
            HttpResponse::InternalServerError()
                .json(json!({ "error": "Failed to fetch country details" }))
        }
    }
}

/// Visa facts for a passport/destination pair. The external provider is
/// consulted first; stored rules answer when it cannot, and the response
/// always carries at least `{type: "unknown"}`.
pub async fn get_visa_requirements(
    countries: web::Data<CountryService>,
    passports: web::Data<PassportService>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (passport_code, country_code) = path.into_inner();

    if let Some(info) = passports
        .check_visa_requirements(&passport_code, &country_code)
        .await
    {
        return HttpResponse::Ok().json(info);
    }

    match countries.get_visa_rule(&passport_code, &country_code).await {
        Ok(rule) => HttpResponse::Ok().json(rule),
        Err(err) => {
            eprintln!(
                "Failed to fetch visa rule {} -> {}: {:?}",
                passport_code, country_code, err
            );
            HttpResponse::InternalServerError()
                .json(json!({ "error": "Failed to fetch visa requirements" }))
        }
    }
}
