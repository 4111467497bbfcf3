use actix_web::{web, HttpResponse, Responder};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::error::WriteError;
use mongodb::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::middleware::auth::Claims;
use crate::models::user::User;

const BCRYPT_COST: u32 = 10;

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    token: String,
    user: AuthUser,
}

#[derive(Debug, Serialize)]
pub struct AuthUser {
    id: String,
    email: String,
}

pub async fn register(
    data: web::Data<Arc<Client>>,
    input: web::Json<Credentials>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<User> = client.database("Account").collection("Users");

    let credentials = input.into_inner();

    if !is_valid_email(&credentials.email) {
        return HttpResponse::BadRequest().json(json!({ "error": "Invalid email address" }));
    }

    match collection.find_one(doc! { "email": &credentials.email }).await {
        Ok(Some(_)) => {
            return HttpResponse::BadRequest().json(json!({ "error": "User already exists" }))
        }
        Ok(None) => {}
        Err(err) => {
            eprintln!("Database error during registration: {:?}", err);
            return HttpResponse::InternalServerError()
                .json(json!({ "error": "Registration failed" }));
        }
    }

    let password_hash = match bcrypt::hash(&credentials.password, BCRYPT_COST) {
        Ok(hash) => hash,
        Err(err) => {
            eprintln!("Failed to hash password: {:?}", err);
            return HttpResponse::InternalServerError()
                .json(json!({ "error": "Registration failed" }));
        }
    };

    let curr_time = Utc::now();
    let user = User {
        id: None,
        email: credentials.email.clone(),
        password_hash,
        full_name: None,
        bio: None,
        avatar_url: None,
        notifications_enabled: None,
        passport_code: None,
        created_at: Some(curr_time),
        updated_at: Some(curr_time),
    };

    match collection.insert_one(&user).await {
        Ok(result) => {
            let user_id = match result.inserted_id.as_object_id() {
                Some(id) => id,
                None => {
                    return HttpResponse::InternalServerError()
                        .json(json!({ "error": "Registration failed" }))
                }
            };

            match generate_token(&credentials.email, user_id) {
                Ok(token) => HttpResponse::Created().json(AuthResponse {
                    token,
                    user: AuthUser {
                        id: user_id.to_hex(),
                        email: credentials.email,
                    },
                }),
                Err(err) => {
                    eprintln!("Token generation failed: {:?}", err);
                    HttpResponse::InternalServerError()
                        .json(json!({ "error": "Registration failed" }))
                }
            }
        }
        Err(err) => match *err.kind {
            // The unique index on email backstops concurrent registrations
            // that both pass the find_one check above.
            mongodb::error::ErrorKind::Write(mongodb::error::WriteFailure::WriteError(
                WriteError { code: 11000, .. },
            )) => HttpResponse::BadRequest().json(json!({ "error": "User already exists" })),
            other => {
                eprintln!("Failed to create user: {:?}", other);
                HttpResponse::InternalServerError().json(json!({ "error": "Registration failed" }))
            }
        },
    }
}

pub async fn login(data: web::Data<Arc<Client>>, input: web::Json<Credentials>) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<User> = client.database("Account").collection("Users");

    let credentials = input.into_inner();

    let user = match collection.find_one(doc! { "email": &credentials.email }).await {
        Ok(Some(user)) => user,
        // Unknown email and wrong password answer identically, so the
        // endpoint cannot be used to enumerate accounts.
        Ok(None) => {
            return HttpResponse::BadRequest().json(json!({ "error": "Invalid credentials" }))
        }
        Err(err) => {
            eprintln!("Database error during login: {:?}", err);
            return HttpResponse::InternalServerError().json(json!({ "error": "Login failed" }));
        }
    };

    if !bcrypt::verify(&credentials.password, &user.password_hash).unwrap_or(false) {
        return HttpResponse::BadRequest().json(json!({ "error": "Invalid credentials" }));
    }

    let user_id = match user.id {
        Some(id) => id,
        None => {
            eprintln!("Stored user is missing an _id: {}", user.email);
            return HttpResponse::InternalServerError().json(json!({ "error": "Login failed" }));
        }
    };

    match generate_token(&user.email, user_id) {
        Ok(token) => HttpResponse::Ok().json(AuthResponse {
            token,
            user: AuthUser {
                id: user_id.to_hex(),
                email: user.email,
            },
        }),
        Err(err) => {
            eprintln!("Token generation failed: {:?}", err);
            HttpResponse::InternalServerError().json(json!({ "error": "Login failed" }))
        }
    }
}

fn is_valid_email(email: &str) -> bool {
    let re = regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?)*$",
    );
    re.unwrap().is_match(email)
}

pub fn generate_token(email: &str, user_id: ObjectId) -> Result<String, jsonwebtoken::errors::Error> {
    let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| "default_secret".to_string());
    let now = Utc::now();

    let claims = Claims {
        sub: email.to_string(),
        iat: now.timestamp() as usize,
        exp: (now + Duration::hours(24)).timestamp() as usize,
        user_id: user_id.to_hex(),
    };

    let header = Header::new(Algorithm::HS256);
    encode(&header, &claims, &EncodingKey::from_secret(secret.as_ref()))
}
