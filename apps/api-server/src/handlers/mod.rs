//! HTTP handlers and route configuration.

mod posts;
mod users;


use actix_web::{HttpResponse, web};
use quill_shared::ErrorResponse;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/posts", web::get().to(posts::list_posts))
        .route("/posts", web::post().to(posts::create_post))
        .route("/posts/{id}", web::get().to(posts::get_post))
        .route("/posts/{id}", web::put().to(posts::update_post))
        .route("/posts/{id}", web::delete().to(posts::delete_post))
        .route("/users", web::get().to(users::list_users))
        .route("/users", web::post().to(users::create_user));
}

/// JSON extraction config: an absent or unreadable body is a 400 with the
/// contract's message rather than actix's default error text.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ErrorResponse::new("No request body")),
        )
        .into()
    })
}

/// Catch-all for unmatched routes.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::not_found())
}
