//! Shared utilities for integration testing.

use std::collections::HashMap;

use axum::body::Body;
use axum::http::{Method, Request};
use versioned_router::{LegacyRouteResolver, Route, RouteError};

/// Build a request with the given method and path.
pub fn request(method: Method, path: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .body(Body::default())
        .unwrap()
}

/// Legacy resolver that always resolves to a fixed controller/action.
#[derive(Debug)]
pub struct FixedLegacyResolver {
    pub controller: &'static str,
    pub action: &'static str,
}

impl LegacyRouteResolver for FixedLegacyResolver {
    fn resolve(&self, _req: &Request<Body>) -> Result<Route, RouteError> {
        Ok(Route::new(self.controller, self.action, HashMap::new()))
    }
}

/// Legacy resolver that always fails with 404.
#[derive(Debug)]
#[allow(dead_code)]
pub struct UnroutableLegacyResolver;

impl LegacyRouteResolver for UnroutableLegacyResolver {
    fn resolve(&self, req: &Request<Body>) -> Result<Route, RouteError> {
        Err(RouteError::NotFound {
            path: req.uri().path().to_string(),
        })
    }
}
