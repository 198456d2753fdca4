//! Routing error definitions.

use axum::http::Method;
use thiserror::Error;

use crate::routing::route::Route;

/// Errors that can occur during route selection.
#[derive(Debug, Error)]
pub enum RouteError {
    /// No rule matched the request path, in this router or the legacy table.
    #[error("no route for path {path}")]
    NotFound { path: String },

    /// A rule matched the path but none admitted the request method.
    /// Surfaced to clients as 415.
    #[error("method {method} not supported for path {path}")]
    MethodNotSupported { method: Method, path: String },
}

impl RouteError {
    /// HTTP status equivalent for callers translating failures into responses.
    pub fn status_code(&self) -> u16 {
        match self {
            RouteError::NotFound { .. } => 404,
            RouteError::MethodNotSupported { .. } => 415,
        }
    }
}

/// Result type for route selection.
pub type RouteResult = Result<Route, RouteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let err = RouteError::NotFound {
            path: "/v2.2/events".to_string(),
        };
        assert_eq!(err.status_code(), 404);

        let err = RouteError::MethodNotSupported {
            method: Method::POST,
            path: "/v2.1/events".to_string(),
        };
        assert_eq!(err.status_code(), 415);
    }

    #[test]
    fn test_error_display() {
        let err = RouteError::NotFound {
            path: "/v2.2/events".to_string(),
        };
        assert_eq!(err.to_string(), "no route for path /v2.2/events");

        let err = RouteError::MethodNotSupported {
            method: Method::POST,
            path: "/v2.1/events".to_string(),
        };
        assert!(err.to_string().contains("POST"));
    }
}
