//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Message returned for every lookup of an advert that does not exist.
pub const NOT_FOUND_MESSAGE: &str = "Advert not found!";

/// Field name to human-readable messages. Ordered so responses are stable.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(FieldErrors),
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    /// Validation error carrying a single message for a single field.
    pub fn field(name: &str, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(name.to_string(), vec![message.into()]);
        AppError::Validation(errors)
    }
}

#[derive(Serialize)]
pub struct ErrorBody<T> {
    pub error: T,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody { error: errors })).into_response()
            }
            AppError::NotFound => {
                let body = ErrorBody {
                    error: NOT_FOUND_MESSAGE,
                };
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, "store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody { error: "Internal server error" }),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(AppError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::field("owner", "Missing data for required field.").into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Db(sqlx::Error::PoolClosed).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_body_shapes() {
        let not_found = serde_json::to_value(ErrorBody { error: NOT_FOUND_MESSAGE }).unwrap();
        assert_eq!(not_found, serde_json::json!({ "error": "Advert not found!" }));

        let mut errors = FieldErrors::new();
        errors.insert("title".into(), vec!["Longer than maximum length 25.".into()]);
        let body = serde_json::to_value(ErrorBody { error: errors }).unwrap();
        assert_eq!(body["error"]["title"][0], "Longer than maximum length 25.");
    }
}
