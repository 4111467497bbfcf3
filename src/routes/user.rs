use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Client;
use serde_json::json;
use std::sync::Arc;

use crate::middleware::auth::Claims;
use crate::models::user::{ProfileUpdate, User, UserProfile};

pub async fn get_profile(
    claims: web::ReqData<Claims>,
    data: web::Data<Arc<Client>>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<User> = client.database("Account").collection("Users");

    let user_id = match ObjectId::parse_str(&claims.user_id) {
        Ok(user_id) => user_id,
        Err(_) => return HttpResponse::BadRequest().json(json!({ "error": "Invalid user ID" })),
    };

    match collection.find_one(doc! { "_id": user_id }).await {
        Ok(Some(user)) => HttpResponse::Ok().json(UserProfile::from(user)),
        Ok(None) => HttpResponse::NotFound().json(json!({ "error": "User not found" })),
        Err(err) => {
            eprintln!("Failed to fetch user: {:?}", err);
            HttpResponse::InternalServerError().json(json!({ "error": "Failed to fetch profile" }))
        }
    }
}

pub async fn update_profile(
    claims: web::ReqData<Claims>,
    data: web::Data<Arc<Client>>,
    input: web::Json<ProfileUpdate>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<User> = client.database("Account").collection("Users");

    let user_id = match ObjectId::parse_str(&claims.user_id) {
        Ok(user_id) => user_id,
        Err(_) => return HttpResponse::BadRequest().json(json!({ "error": "Invalid user ID" })),
    };

    let update = input.into_inner();
    let mut set = doc! { "updated_at": Utc::now().to_rfc3339() };
    if let Some(full_name) = update.full_name {
        set.insert("full_name", full_name);
    }
    if let Some(bio) = update.bio {
        set.insert("bio", bio);
    }
    if let Some(avatar_url) = update.avatar_url {
        set.insert("avatar_url", avatar_url);
    }
    if let Some(notifications_enabled) = update.notifications_enabled {
        set.insert("notifications_enabled", notifications_enabled);
    }
    if let Some(passport_code) = update.passport_code {
        set.insert("passport_code", passport_code.to_uppercase());
    }

    match collection
        .update_one(doc! { "_id": user_id }, doc! { "$set": set })
        .await
    {
        Ok(result) if result.matched_count == 0 => {
            HttpResponse::NotFound().json(json!({ "error": "User not found" }))
        }
        Ok(_) => match collection.find_one(doc! { "_id": user_id }).await {
            Ok(Some(user)) => HttpResponse::Ok().json(UserProfile::from(user)),
            Ok(None) => HttpResponse::NotFound().json(json!({ "error": "User not found" })),
            Err(err) => {
                eprintln!("Failed to fetch updated user: {:?}", err);
                HttpResponse::InternalServerError()
                    .json(json!({ "error": "Failed to update profile" }))
            }
        },
        Err(err) => {
            eprintln!("Failed to update user: {:?}", err);
            HttpResponse::InternalServerError().json(json!({ "error": "Failed to update profile" }))
        }
    }
}
