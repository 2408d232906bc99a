use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const VALIDATION_MESSAGE: &str = "All fields (firstName, lastName, hobby) are required";
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Resource not found";
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong!";

#[derive(Debug)]
pub enum AppError {
    Validation,
    UserNotFound,
    RouteNotFound,
    /// Detail is logged, never sent to the client
    Internal(String),
}

/// JSON body of every error response
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// Message returned to the client
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::Validation => VALIDATION_MESSAGE,
            AppError::UserNotFound => USER_NOT_FOUND_MESSAGE,
            AppError::RouteNotFound => ROUTE_NOT_FOUND_MESSAGE,
            AppError::Internal(_) => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation => write!(f, "Validation error: {}", VALIDATION_MESSAGE),
            AppError::UserNotFound => write!(f, "Not found: {}", USER_NOT_FOUND_MESSAGE),
            AppError::RouteNotFound => write!(f, "Not found: {}", ROUTE_NOT_FOUND_MESSAGE),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation => StatusCode::BAD_REQUEST,
            AppError::UserNotFound | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Internal(detail) = self {
            log::error!("❌ {}", detail);
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.public_message().to_string(),
        })
    }
}

/// Maps `web::Json` extraction failures onto the service's error contract.
///
/// A request without a JSON content type or with an empty body carries no
/// fields, and neither does a JSON document of the wrong shape: all of these
/// are validation failures. Malformed JSON falls through to the generic 500.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let app_error = match &err {
        JsonPayloadError::ContentType => AppError::Validation,
        JsonPayloadError::Deserialize(e) if e.is_data() || is_empty_body(e) => AppError::Validation,
        _ => AppError::Internal(format!(
            "Failed to parse JSON body for {} {}: {}",
            req.method(),
            req.path(),
            err
        )),
    };

    app_error.into()
}

/// EOF before the first byte: the payload was zero-length
fn is_empty_body(e: &serde_json::Error) -> bool {
    e.is_eof() && e.line() == 1 && e.column() == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn test_status_codes() {
        assert_eq!(AppError::Validation.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::RouteNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn test_internal_detail_is_not_leaked() {
        let response = AppError::Internal("lock poisoned".into()).error_response();
        let body = to_bytes(response.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(value, serde_json::json!({ "error": "Something went wrong!" }));
    }

    #[actix_web::test]
    async fn test_validation_body() {
        let response = AppError::Validation.error_response();
        let body = to_bytes(response.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(value["error"], VALIDATION_MESSAGE);
    }

    #[test]
    fn test_empty_body_detection() {
        let empty = serde_json::from_slice::<serde_json::Value>(b"").unwrap_err();
        let truncated = serde_json::from_slice::<serde_json::Value>(b"{").unwrap_err();
        let blank = serde_json::from_slice::<serde_json::Value>(b"   ").unwrap_err();

        assert!(is_empty_body(&empty));
        assert!(!is_empty_body(&truncated));
        assert!(!is_empty_body(&blank));
    }

    #[actix_web::test]
    async fn test_json_error_handler_mapping() {
        let req = actix_web::test::TestRequest::post().uri("/add-user").to_http_request();

        let empty = serde_json::from_slice::<serde_json::Value>(b"").unwrap_err();
        let malformed = serde_json::from_slice::<serde_json::Value>(b"{\"a\":").unwrap_err();

        let cases = [
            (JsonPayloadError::ContentType, StatusCode::BAD_REQUEST),
            (JsonPayloadError::Deserialize(empty), StatusCode::BAD_REQUEST),
            (JsonPayloadError::Deserialize(malformed), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            let response = json_error_handler(err, &req).error_response();
            assert_eq!(response.status(), expected);
        }
    }
}
