//! Application error type and its HTTP mapping.
//!
//! Client-visible bodies are short fixed strings. The `details` carried by
//! each variant are for server-side logs only and never reach the response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing header, missing `Bearer ` prefix or unknown token.
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{message}: {details}")]
    Validation {
        message: &'static str,
        details: String,
    },

    #[error("{message}: {details}")]
    NotFound {
        message: &'static str,
        details: String,
    },

    #[error("{message}: {details}")]
    Internal {
        message: &'static str,
        details: String,
    },

    #[error("Method not supported")]
    MethodNotAllowed,
}

impl AppError {
    pub fn bad_request(message: &'static str, details: impl Into<String>) -> Self {
        Self::Validation {
            message,
            details: details.into(),
        }
    }

    pub fn not_found(message: &'static str, details: impl Into<String>) -> Self {
        Self::NotFound {
            message,
            details: details.into(),
        }
    }

    pub fn internal(message: &'static str, details: impl Into<String>) -> Self {
        Self::Internal {
            message,
            details: details.into(),
        }
    }

    /// Status code this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Body sent to the client.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::Unauthorized => "Unauthorized",
            AppError::Validation { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Internal { message, .. } => *message,
            AppError::MethodNotAllowed => "Method not supported",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), self.public_message()).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::internal("Unique constraint violation", db.message().to_string());
        }

        AppError::internal("Database error", e.to_string())
    }
}
