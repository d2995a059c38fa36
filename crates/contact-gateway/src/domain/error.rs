//! Contact endpoint error taxonomy and its HTTP mapping.
//!
//! Client-caused errors carry a message meant for the end user. Internal
//! errors carry detail meant for the log only; the client always sees
//! [`GENERIC_FAILURE`].

use crate::domain::submission::ValidationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Message returned with every accepted submission
pub const ACCEPTED_MESSAGE: &str = "Message received successfully!";

/// Message returned when the body cannot be read as a contact payload
pub const MALFORMED_BODY_MESSAGE: &str = "Invalid request body";

/// Message returned for any server-side fault
pub const GENERIC_FAILURE: &str = "An error occurred while processing your request";

/// Body of every `/api/contact` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

impl ContactResponse {
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: ACCEPTED_MESSAGE.to_string(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl IntoResponse for ContactResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Failure of a downstream submission sink
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// Collaborator could not be reached
    #[error("sink unavailable: {0}")]
    Unavailable(String),

    /// Collaborator refused or failed the hand-off
    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// Error produced while handling one contact submission
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    /// Required field missing or email malformed
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Body was not a JSON contact payload
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    /// Unexpected server-side fault
    #[error("internal error: {0}")]
    Internal(String),
}

impl ContactError {
    pub fn status(&self) -> StatusCode {
        match self {
            ContactError::Validation(_) | ContactError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ContactError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the end user
    pub fn public_message(&self) -> &'static str {
        match self {
            ContactError::Validation(ValidationError::MissingFields) => {
                "Name, email, and message are required"
            }
            ContactError::Validation(ValidationError::InvalidEmail) => {
                "Please provide a valid email address"
            }
            ContactError::MalformedBody(_) => MALFORMED_BODY_MESSAGE,
            ContactError::Internal(_) => GENERIC_FAILURE,
        }
    }
}

impl From<SinkError> for ContactError {
    fn from(e: SinkError) -> Self {
        ContactError::Internal(e.to_string())
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ContactResponse::failure(self.public_message())),
        )
            .into_response()
    }
}

/// Result type for contact operations
pub type ContactResult<T> = Result<T, ContactError>;

/// Gateway-level errors (startup and serving, never sent to clients)
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] crate::domain::config::ConfigError),

    /// Server socket bind error
    #[error("server bind error: {0}")]
    Bind(#[source] std::io::Error),

    /// Accept loop failed
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
