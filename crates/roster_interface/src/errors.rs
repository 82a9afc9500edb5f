use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    CustomError { msg: String },
    MongoError { msg: String },
    BsonError { msg: String },
    ReqwestError { msg: String },
    StoreError { status: u16, msg: String }, // Non-success answer from the document store.
    MalformedRecord { id: String, msg: String },
    ParseError { msg: String },
    ConfigError { msg: String },
}

pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    pub fn malformed(id: &str, msg: impl Into<String>) -> Self {
        AppError::MalformedRecord {
            id: id.to_string(),
            msg: msg.into(),
        }
    }

    // Failures coming from the document store, a client can offer a retry.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::MongoError { .. }
                | AppError::BsonError { .. }
                | AppError::ReqwestError { .. }
                | AppError::StoreError { .. }
                | AppError::MalformedRecord { .. }
        )
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ParseError { .. } => StatusCode::BAD_REQUEST,
            _ if self.is_retryable() => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::CustomError { msg } => write!(f, "Custom Error: '{}'", msg),
            AppError::MongoError { msg } => write!(f, "MongoDB Error: '{}'", msg),
            AppError::BsonError { msg } => write!(f, "Bson Deserialization Error: '{}'", msg),
            AppError::ReqwestError { msg } => write!(f, "Reqwest Error: '{}'", msg),
            AppError::StoreError { status, msg } => {
                write!(f, "Document Store Error ({}): '{}'", status, msg)
            }
            AppError::MalformedRecord { id, msg } => {
                write!(f, "Malformed Record '{}': '{}'", id, msg)
            }
            AppError::ParseError { msg } => write!(f, "Parse Error: '{}'", msg),
            AppError::ConfigError { msg } => write!(f, "Config Error: '{}'", msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        let body = json!({
            "error": self.to_string(),
            "retryable": self.is_retryable(),
        });

        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_failures_are_retryable_bad_gateway() {
        let err = AppError::MongoError {
            msg: "connection refused".to_string(),
        };
        assert!(err.is_retryable());
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);

        let err = AppError::malformed("abc", "missing field `name`");
        assert!(err.is_retryable());
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            err.to_string(),
            "Malformed Record 'abc': 'missing field `name`'"
        );
    }

    #[test]
    fn parse_error_is_a_bad_request() {
        let err = AppError::ParseError {
            msg: "bad query".to_string(),
        };
        assert!(!err.is_retryable());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn custom_error_is_internal() {
        let err = AppError::CustomError {
            msg: "boom".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
