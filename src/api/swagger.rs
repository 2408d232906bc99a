use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users Service API",
        version = "1.0.0",
        description = "CRUD API over an in-memory list of user records.\n\n**Storage:** records live in memory only and are lost on restart.\n\n**Errors:** every failure is returned as `{\"error\": \"...\"}`.",
        contact(
            name = "Users Service Team"
        )
    ),
    paths(
        // Users
        crate::api::users::list_users,
        crate::api::users::get_user,
        crate::api::users::add_user,
        crate::api::users::update_user,
        crate::api::users::delete_user,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            // Users
            crate::models::User,
            crate::models::UserInput,
            crate::models::MessageResponse,
            crate::utils::error::ErrorResponse,

            // Health & Metrics
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
        )
    ),
    tags(
        (name = "Users", description = "Create, read, update and delete user records."),
        (name = "Health", description = "Health check and system metrics endpoints for monitoring service status."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/users",
            "/users/{id}",
            "/add-user",
            "/update-user/{id}",
            "/delete-user/{id}",
            "/health",
            "/metrics",
        ] {
            assert!(paths.contains(&expected), "missing {}", expected);
        }
    }
}
