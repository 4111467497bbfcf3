use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::services::passport_service::PassportService;

pub async fn get_rankings(service: web::Data<PassportService>) -> impl Responder {
    let rankings = service.get_passport_ranking().await;
    HttpResponse::Ok().json(rankings)
}

pub async fn get_passport(
    service: web::Data<PassportService>,
    path: web::Path<String>,
) -> impl Responder {
    let code = path.into_inner();

    match service.get_passport_by_code(&code).await {
        Some(passport) => HttpResponse::Ok().json(passport),
        None => HttpResponse::NotFound().json(json!({ "error": "Passport not found" })),
    }
}
