//! HTTP handlers and route configuration.

mod categories;
mod health;
mod posts;
mod sitemap;
mod users;


use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/sitemap.xml", web::get().to(sitemap::sitemap));
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Content routes
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list))
                    .route("", web::post().to(posts::create))
                    .route("/{slug}", web::get().to(posts::get_by_slug))
                    .route("/{slug}", web::patch().to(posts::update))
                    .route("/{slug}", web::delete().to(posts::delete)),
            )
            .service(
                web::scope("/categories")
                    .route("", web::get().to(categories::list))
                    .route("", web::post().to(categories::create))
                    .route("/{id}", web::patch().to(categories::update)),
            )
            .service(
                web::scope("/users")
                    .route("", web::get().to(users::list))
                    .route("", web::post().to(users::create))
                    .route("/{id}", web::patch().to(users::update)),
            ),
    );
}
