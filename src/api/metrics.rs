use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::database::UserStore;
use crate::utils::error::AppError;

static REQUEST_COUNT: AtomicU64 = AtomicU64::new(0);
static ERROR_COUNT: AtomicU64 = AtomicU64::new(0);

pub fn increment_request_count() {
    REQUEST_COUNT.fetch_add(1, Ordering::Relaxed);
}

pub fn increment_error_count() {
    ERROR_COUNT.fetch_add(1, Ordering::Relaxed);
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MetricsResponse {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub users_total: usize,
}

impl MetricsResponse {
    fn render(&self) -> String {
        format!(
            "# HELP http_requests_total Total number of HTTP requests\n\
             # TYPE http_requests_total counter\n\
             http_requests_total {}\n\
             \n\
             # HELP http_errors_total Total number of HTTP errors\n\
             # TYPE http_errors_total counter\n\
             http_errors_total {}\n\
             \n\
             # HELP users_total Number of user records in the store\n\
             # TYPE users_total gauge\n\
             users_total {}\n",
            self.http_requests_total, self.http_errors_total, self.users_total
        )
    }
}

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Health",
    responses(
        (status = 200, description = "Prometheus text exposition of service metrics", body = String, content_type = "text/plain")
    )
)]
pub async fn get_metrics(store: web::Data<UserStore>) -> Result<HttpResponse, AppError> {
    let metrics = MetricsResponse {
        http_requests_total: REQUEST_COUNT.load(Ordering::Relaxed),
        http_errors_total: ERROR_COUNT.load(Ordering::Relaxed),
        users_total: store.len()?,
    };

    Ok(HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(metrics.render()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_every_series() {
        let text = MetricsResponse {
            http_requests_total: 12,
            http_errors_total: 3,
            users_total: 5,
        }
        .render();

        assert!(text.contains("http_requests_total 12\n"));
        assert!(text.contains("http_errors_total 3\n"));
        assert!(text.contains("# TYPE users_total gauge\n"));
        assert!(text.contains("users_total 5\n"));
    }
}
