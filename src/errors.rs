//! # Error Handling
//!
//! The crate has two failure edges: a request submitted a `filters` parameter
//! that is not valid JSON, and a grid configuration registered the same
//! filter name twice. Everything else in the filter pipeline is
//! defensive-skip by design and never fails.
//!
//! Internal details are logged via `tracing` and never sent to clients; the
//! `IntoResponse` impl returns sanitized bodies so handlers can use
//! `Result<_, FilterError>` directly.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;

/// Errors raised at the edges of the filter pipeline.
#[derive(Debug)]
pub enum FilterError {
    /// 400 Bad Request - the submitted `filters` parameter is not a JSON
    /// object
    InvalidFilterJson {
        /// Parser detail (logged, not sent to the client)
        details: String,
    },

    /// 500 Internal Server Error - a grid registered two filters under the
    /// same name; value lookup would be ambiguous. This is a configuration
    /// error, not a user error.
    DuplicateFilterName {
        /// The name registered more than once
        filter_name: String,
    },
}

impl FilterError {
    pub fn invalid_filter_json(details: impl Into<String>) -> Self {
        Self::InvalidFilterJson {
            details: details.into(),
        }
    }

    pub fn duplicate_filter_name(filter_name: impl Into<String>) -> Self {
        Self::DuplicateFilterName {
            filter_name: filter_name.into(),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidFilterJson { .. } => StatusCode::BAD_REQUEST,
            Self::DuplicateFilterName { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The sanitized, user-facing message.
    fn user_message(&self) -> String {
        match self {
            Self::InvalidFilterJson { .. } => {
                "The filters parameter must be a JSON object".to_string()
            }
            Self::DuplicateFilterName { .. } => "A server error occurred".to_string(),
        }
    }

    /// Log internal details (not sent to the client).
    fn log_internal(&self) {
        match self {
            Self::InvalidFilterJson { details } => {
                tracing::debug!(details = %details, "rejected filters parameter");
            }
            Self::DuplicateFilterName { filter_name } => {
                tracing::error!(
                    filter = %filter_name,
                    "grid configuration registered the same filter name twice"
                );
            }
        }
    }
}

/// Error response sent to clients (sanitized).
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for FilterError {
    fn into_response(self) -> Response {
        self.log_internal();

        let response = ErrorResponse {
            error: self.user_message(),
        };
        (self.status_code(), Json(response)).into_response()
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFilterJson { details } => {
                write!(f, "invalid filters parameter: {details}")
            }
            Self::DuplicateFilterName { filter_name } => {
                write!(f, "duplicate filter name: {filter_name}")
            }
        }
    }
}

impl std::error::Error for FilterError {}
