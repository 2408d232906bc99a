use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::database::UserStore;
use crate::utils::error::AppError;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub users: usize,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 500, description = "User store unavailable", body = crate::utils::error::ErrorResponse)
    )
)]
pub async fn health_check(store: web::Data<UserStore>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        users: store.len()?,
        timestamp: chrono::Utc::now().timestamp(),
    }))
}
