//! HTTP handlers and route configuration.

mod communications;
mod health;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Board routes
            .service(
                web::scope("/communications")
                    .route("", web::get().to(communications::list))
                    .route("", web::post().to(communications::create))
                    .route("/stats", web::get().to(communications::stats))
                    .route("/{id}", web::get().to(communications::get_one))
                    .route("/{id}", web::patch().to(communications::update))
                    .route("/{id}", web::delete().to(communications::delete))
                    .route("/{id}/read", web::post().to(communications::record_read))
                    .route("/{id}/like", web::post().to(communications::record_like))
                    .route(
                        "/{id}/comment",
                        web::post().to(communications::record_comment),
                    ),
            ),
    );
}
