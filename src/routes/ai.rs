use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

use crate::models::trip::TripRequest;
use crate::services::hotel_service::HotelService;
use crate::services::trip_planning_service::TripPlanner;

#[derive(Debug, Deserialize)]
pub struct OptimizeRouteRequest {
    pub destinations: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct HotelsQuery {
    pub country: Option<String>,
}

pub async fn plan_trip(
    planner: web::Data<TripPlanner>,
    input: web::Json<TripRequest>,
) -> impl Responder {
    match planner.generate_trip_plan(&input).await {
        Ok(plan) => HttpResponse::Ok().json(plan),
        Err(err) => {
            eprintln!("Failed to generate trip plan: {:?}", err);
            HttpResponse::InternalServerError()
                .json(json!({ "error": "Failed to generate trip plan" }))
        }
    }
}

pub async fn optimize_route(
    planner: web::Data<TripPlanner>,
    input: web::Json<OptimizeRouteRequest>,
) -> impl Responder {
    let route = planner.optimize_route(input.into_inner().destinations);
    HttpResponse::Ok().json(route)
}

pub async fn top_hotels(
    service: web::Data<HotelService>,
    params: web::Query<HotelsQuery>,
) -> impl Responder {
    let country = match params.country.as_deref().map(str::trim) {
        Some(country) if !country.is_empty() => country.to_string(),
        _ => {
            return HttpResponse::BadRequest()
                .json(json!({ "error": "Country parameter is required" }))
        }
    };

    HttpResponse::Ok().json(service.top_hotels(&country).await)
}
