use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Duplicate unique key. Surfaces as 400 like any other rejected payload.
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Corrupt collection file {path}: {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize collection {name}: {source}")]
    SerializeError {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Password hashing error: {0}")]
    Hashing(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) | AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::ParseError { .. }
            | AppError::SerializeError { .. }
            | AppError::Io(_)
            | AppError::Hashing(_)
            | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Server-side details stay in the log
        let message = if self.status_code().is_server_error() {
            log::error!("❌ {}", self);
            match self {
                AppError::Hashing(_) | AppError::Config(_) => "Internal server error".to_string(),
                _ => "Internal storage error".to_string(),
            }
        } else {
            self.to_string()
        };

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "success": false,
            "error": message
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::InvalidRequest("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Conflict("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::Unauthorized("x".into()).status_code(), StatusCode::UNAUTHORIZED);

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(AppError::from(io).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_parse_error_is_fatal() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = AppError::ParseError { path: "data/recipes.json".into(), source };

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().starts_with("Corrupt collection file data/recipes.json"));
    }

    #[actix_rt::test]
    async fn test_server_error_body_is_generic() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = AppError::ParseError { path: "/srv/data/recipes.json".into(), source };

        let body = actix_web::body::to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json, serde_json::json!({ "success": false, "error": "Internal storage error" }));
    }

    #[actix_rt::test]
    async fn test_client_error_body_keeps_message() {
        let err = AppError::NotFound("Recipe not found".into());

        let body = actix_web::body::to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"], "Recipe not found");
    }
}
