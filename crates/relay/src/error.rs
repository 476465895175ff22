//! Unified error handling for the relay's HTTP edge.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use payroll_relay_core::Locale;
use thiserror::Error;

use crate::services::DispatchError;

/// Application-level error type for HTTP handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request from client. The message is returned as the body.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Request signature missing or invalid.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// An uploaded batch failed.
    ///
    /// The client only sees the locale's generic failure text.
    #[error("Dispatch error: {source}")]
    Dispatch {
        locale: Locale,
        #[source]
        source: DispatchError,
    },
}

impl AppError {
    /// Wrap a dispatch failure, answered in `locale`.
    #[must_use]
    pub const fn dispatch(locale: Locale, source: DispatchError) -> Self {
        Self::Dispatch { locale, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log server errors with Sentry
        if matches!(self, Self::Dispatch { .. }) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Relay request error"
            );
        } else {
            tracing::warn!(error = %self, "Rejected request");
        }

        let status = match &self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Dispatch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::BadRequest(message) => message.clone(),
            Self::Unauthorized(_) => "Unauthorized".to_string(),
            Self::Dispatch { locale, .. } => {
                payroll_relay_core::templates(*locale).upload_failed().to_string()
            }
        };

        (status, message).into_response()
    }
}
