use actix_web::{web, HttpResponse, Responder};
use mongodb::{bson::doc, Client};
use serde::Serialize;
use std::collections::HashMap;
use std::env;
use std::sync::Arc;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(client: web::Data<Arc<Client>>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    // Check MongoDB connection
    let mongo_result = check_mongodb(&client).await;

    // Only the database can degrade the service. The external providers
    // are optional by design: without them the API answers from mock and
    // fallback data, which is still a healthy state.
    if mongo_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    health.services.insert("mongodb".to_string(), mongo_result);
    health.services.insert(
        "gemini".to_string(),
        check_optional_key("GEMINI_API_KEY", "Gemini"),
    );
    health.services.insert(
        "travel_buddy".to_string(),
        check_optional_key("TRAVEL_BUDDY_API_KEY", "TravelBuddy"),
    );

    HttpResponse::Ok().json(health)
}

async fn check_mongodb(client: &web::Data<Arc<Client>>) -> ServiceStatus {
    match client
        .database("Account")
        .run_command(doc! {"ping": 1})
        .await
    {
        Ok(_) => ServiceStatus {
            status: "ok".to_string(),
            details: Some("Connected successfully to MongoDB".to_string()),
        },
        Err(e) => {
            // Log error for internal visibility
            eprintln!("MongoDB health check failed: {}", e);

            ServiceStatus {
                status: "error".to_string(),
                details: Some(format!("Failed to connect: {}", e)),
            }
        }
    }
}

fn check_optional_key(var: &str, label: &str) -> ServiceStatus {
    // Just validate key existence for basic check
    match env::var(var) {
        Ok(key) if !key.is_empty() => {
            let masked_key = if key.len() > 8 {
                format!("{}***{}", &key[0..4], &key[key.len() - 4..])
            } else {
                "***".to_string()
            };

            ServiceStatus {
                status: "ok".to_string(),
                details: Some(format!("{} API key configured ({})", label, masked_key)),
            }
        }
        _ => ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("{} not configured, running in fallback mode", label)),
        },
    }
}
