//! Unified error types for the Descontin API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Persistence errors raised by repositories
//! - `LookupError`: Postal code lookup client errors
//! - `NotificationError`: Invite notification queue and delivery errors
//! - `AppError`: Application layer errors (validation kinds and wrapped
//!   domain errors, rendered as HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - persistence and integrity failures
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Entity already exists: {0}")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) => {
                DomainError::AlreadyExists(msg)
            }
            _ => DomainError::Database(e.to_string()),
        }
    }
}

/// Postal code lookup errors
///
/// These never reach API callers directly; validation collapses all of them
/// into `AppError::InvalidPostalCode`.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Postal code not found: {0}")]
    NotFound(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Invite notification errors
#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Notification queue is closed")]
    QueueClosed,

    #[error("Delivery failed: {0}")]
    Delivery(String),
}

/// Application layer errors - used by services and HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid postal code")]
    InvalidPostalCode,

    #[error("Postal code is not served yet")]
    PostalCodeOutOfServiceArea,

    #[error("Sender is not a client")]
    InvalidSender,

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Client has no invitations left")]
    InvitationLimitExceeded,

    #[error("User must have an email")]
    MissingEmail,

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::InvalidPostalCode
            | AppError::PostalCodeOutOfServiceArea
            | AppError::InvalidEmail
            | AppError::MissingEmail => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation error",
                Some(self.to_string()),
            ),
            AppError::InvalidSender => (
                StatusCode::BAD_REQUEST,
                "Invalid sender",
                Some(self.to_string()),
            ),
            AppError::InvitationLimitExceeded => (
                StatusCode::TOO_MANY_REQUESTS,
                "Invitation limit exceeded",
                Some(self.to_string()),
            ),
            AppError::Domain(DomainError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "Not found", Some(msg.clone()))
            }
            AppError::Domain(DomainError::AlreadyExists(_)) => {
                (StatusCode::CONFLICT, "Already exists", None)
            }
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Domain(DomainError::Internal(msg)) | AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
