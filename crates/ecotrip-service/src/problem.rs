//! RFC 9457 Problem Details for HTTP APIs.
//!
//! Provides structured error responses following the Problem Details
//! standard. See: <https://www.rfc-editor.org/rfc/rfc9457.html>

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use ecotrip_lib::Error as LibError;

/// Problem type URI for unknown location names.
pub const PROBLEM_UNKNOWN_LOCATION: &str = "/problems/unknown-location";

/// Problem type URI for routes absent from the catalog.
pub const PROBLEM_ROUTE_NOT_FOUND: &str = "/problems/route-not-found";

/// Problem type URI for invalid request parameters.
pub const PROBLEM_INVALID_REQUEST: &str = "/problems/invalid-request";

/// Problem type URI for internal server errors (including bad configuration).
pub const PROBLEM_INTERNAL_ERROR: &str = "/problems/internal-error";

/// RFC 9457 Problem Details response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// URI reference identifying the problem type (relative).
    #[serde(rename = "type")]
    pub type_uri: String,

    /// Short, human-readable summary of the problem.
    pub title: String,

    /// HTTP status code for this problem.
    pub status: u16,

    /// Human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ProblemDetails {
    /// Create a new ProblemDetails with required fields.
    pub fn new(type_uri: impl Into<String>, title: impl Into<String>, status: StatusCode) -> Self {
        Self {
            type_uri: type_uri.into(),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
        }
    }

    /// Add a detailed explanation of this specific problem occurrence.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Shorthand for a 400 invalid-request problem.
    pub fn invalid_request(detail: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INVALID_REQUEST,
            "Invalid Request",
            StatusCode::BAD_REQUEST,
        )
        .with_detail(detail)
    }
}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            [(header::CONTENT_TYPE, "application/problem+json")],
            Json(self),
        )
            .into_response()
    }
}

/// Map a library error to the matching problem response.
pub fn from_lib_error(error: &LibError) -> ProblemDetails {
    match error {
        LibError::UnknownLocation { .. } => ProblemDetails::new(
            PROBLEM_UNKNOWN_LOCATION,
            "Unknown Location",
            StatusCode::NOT_FOUND,
        )
        .with_detail(error.to_string()),
        LibError::RouteNotFound { .. } => ProblemDetails::new(
            PROBLEM_ROUTE_NOT_FOUND,
            "Route Not Found",
            StatusCode::NOT_FOUND,
        )
        .with_detail(error.to_string()),
        _ => ProblemDetails::new(
            PROBLEM_INTERNAL_ERROR,
            "Internal Server Error",
            StatusCode::INTERNAL_SERVER_ERROR,
        )
        .with_detail(error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_location_maps_to_404() {
        let err = LibError::UnknownLocation {
            name: "Atlantis".to_string(),
            suggestions: Vec::new(),
        };
        let problem = from_lib_error(&err);
        assert_eq!(problem.status, 404);
        assert_eq!(problem.type_uri, PROBLEM_UNKNOWN_LOCATION);
    }

    #[test]
    fn configuration_errors_map_to_500() {
        let err = LibError::InvalidCreditConfig {
            message: "kg_per_credit must be positive".to_string(),
        };
        let problem = from_lib_error(&err);
        assert_eq!(problem.status, 500);
    }
}
