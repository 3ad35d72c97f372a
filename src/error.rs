//! Application error type and its HTTP mapping.
//!
//! Every failure is rendered as `{ "message": "..." }` with the matching
//! status code:
//!
//! | Variant        | Status |
//! |----------------|--------|
//! | `BadRequest`   | 400    |
//! | `NotFound`     | 404    |
//! | `Validation`   | 422    |
//! | `Internal`     | 500    |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Foreign key constraints on `books`, paired with the violation they report.
const FOREIGN_KEY_VIOLATIONS: &[(&str, &str)] = &[
    ("books_author_id_fkey", "Author must exist"),
    ("books_publisher_id_fkey", "Publisher must exist"),
];

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    BadRequest { message: String },

    #[error("{message}")]
    NotFound { message: String },

    /// Full messages such as `"Title can't be blank"`, in declaration order.
    #[error("Validation failed: {}", .violations.join(", "))]
    Validation { violations: Vec<String> },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(violations: Vec<String>) -> Self {
        Self::Validation { violations }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Lookup miss for `model` with the identifier exactly as the client sent it.
    pub fn record_not_found(model: &str, id: impl std::fmt::Display) -> Self {
        Self::not_found(format!("Couldn't find {model} with 'id'={id}"))
    }

    /// The required nested parameter `key` was absent or empty.
    pub fn param_missing(key: &str) -> Self {
        Self::bad_request(format!("param is missing or the value is empty: {key}"))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_foreign_key_violation() {
                let violation = FOREIGN_KEY_VIOLATIONS
                    .iter()
                    .find(|(constraint, _)| db.constraint() == Some(*constraint))
                    .map(|(_, violation)| violation.to_string());

                if let Some(violation) = violation {
                    return AppError::validation(vec![violation]);
                }
            }
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_not_found_message() {
        let err = AppError::record_not_found("Book", 950);
        assert_eq!(err.to_string(), "Couldn't find Book with 'id'=950");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_record_not_found_keeps_raw_identifier() {
        let err = AppError::record_not_found("Book", "abc");
        assert_eq!(err.to_string(), "Couldn't find Book with 'id'=abc");
    }

    #[test]
    fn test_param_missing_message() {
        let err = AppError::param_missing("book");
        assert_eq!(
            err.to_string(),
            "param is missing or the value is empty: book"
        );
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_joins_violations() {
        let err = AppError::validation(vec![
            "Author must exist".to_string(),
            "Publisher must exist".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: Author must exist, Publisher must exist"
        );
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::internal("boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = AppError::record_not_found("Author", 3).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_non_database_sqlx_error_is_internal() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
