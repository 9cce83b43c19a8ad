//! HTTP handlers and route configuration.

mod courses;
mod health;
mod media;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::resource("/media")
                    .app_data(web::PayloadConfig::new(media::max_body_bytes()))
                    .route(web::route().to(media::handle)),
            )
            .service(
                web::scope("/courses")
                    .route("", web::get().to(courses::list))
                    // Registered before `/{id}` so "lookup" is not parsed as an id.
                    .route("/lookup", web::get().to(courses::lookup))
                    .route("/{id}", web::get().to(courses::get))
                    .route("/{id}/overview", web::get().to(courses::overview))
                    .route("/{id}/structure", web::get().to(courses::structure))
                    .route("/{id}/cover", web::get().to(courses::cover)),
            ),
    );
}
