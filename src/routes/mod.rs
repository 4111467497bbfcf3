pub mod ai;
pub mod auth;
pub mod country;
pub mod health;
pub mod passport;
pub mod user;

use actix_web::web;

use crate::middleware::auth::AuthMiddleware;

/// The full route tree. Shared between `main` and the integration tests
/// so both always serve the same surface.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(|| async { "Wanderpass API is running" }))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register))
                        .route("/login", web::post().to(auth::login)),
                )
                .service(
                    web::scope("/users")
                        .wrap(AuthMiddleware)
                        .route("/me", web::get().to(user::get_profile))
                        .route("/me", web::put().to(user::update_profile)),
                )
                .service(
                    web::scope("/passports")
                        .route("", web::get().to(passport::get_rankings))
                        .route("/{code}", web::get().to(passport::get_passport)),
                )
                .service(
                    web::scope("/countries")
                        .route("", web::get().to(country::list_countries))
                        .route(
                            "/visa/{passport_code}/{country_code}",
                            web::get().to(country::get_visa_requirements),
                        )
                        .route("/{code}", web::get().to(country::get_country)),
                )
                .service(
                    web::scope("/ai")
                        // Hotels stay public; the planner endpoints need a
                        // signed-in user.
                        .route("/hotels", web::get().to(ai::top_hotels))
                        .service(
                            web::scope("")
                                .wrap(AuthMiddleware)
                                .route("/plan-trip", web::post().to(ai::plan_trip))
                                .route("/optimize-route", web::post().to(ai::optimize_route)),
                        ),
                ),
        );
}
