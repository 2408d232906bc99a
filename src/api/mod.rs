pub mod health;
pub mod metrics;
pub mod swagger;
pub mod users;

use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::utils::error::json_error_handler;

/// Registers every route of the service.
///
/// Known paths answer unsupported methods with the same 404 as unknown
/// paths; the app-level fallback is installed in `main` (and in tests)
/// with `App::default_service`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let openapi = swagger::ApiDoc::openapi();

    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
    .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    // Health & Metrics
    .service(
        web::resource("/health")
            .route(web::get().to(health::health_check))
            .default_service(web::to(users::not_found)),
    )
    .service(
        web::resource("/metrics")
            .route(web::get().to(metrics::get_metrics))
            .default_service(web::to(users::not_found)),
    )
    // Users
    .service(
        web::resource("/users")
            .route(web::get().to(users::list_users))
            .default_service(web::to(users::not_found)),
    )
    .service(
        web::resource("/users/{id}")
            .route(web::get().to(users::get_user))
            .default_service(web::to(users::not_found)),
    )
    .service(
        web::resource("/add-user")
            .route(web::post().to(users::add_user))
            .default_service(web::to(users::not_found)),
    )
    .service(
        web::resource("/update-user/{id}")
            .route(web::put().to(users::update_user))
            .default_service(web::to(users::not_found)),
    )
    .service(
        web::resource("/delete-user/{id}")
            .route(web::delete().to(users::delete_user))
            .default_service(web::to(users::not_found)),
    );
}
