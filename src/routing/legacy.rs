//! Legacy (unversioned) route resolution.
//!
//! Paths without a recognizable version prefix predate the versioned
//! rule tables. The router consumes legacy resolution through the
//! [`LegacyRouteResolver`] trait so embedders can plug in their own
//! strategy; [`SegmentLegacyResolver`] is the built-in one.

use std::collections::HashMap;

use axum::body::Body;
use axum::http::Request;

use crate::routing::error::{RouteError, RouteResult};
use crate::routing::route::Route;

/// Capability interface for resolving unversioned request paths.
pub trait LegacyRouteResolver: Send + Sync + std::fmt::Debug {
    /// Resolve a request against the legacy route table. Errors carry
    /// their own status code and are surfaced to the caller unchanged.
    fn resolve(&self, req: &Request<Body>) -> RouteResult;
}

/// Resolves legacy paths from their first resource segment: `/v1/test`
/// dispatches to `TestController::handle`. A path with no resource
/// segment is unroutable.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentLegacyResolver;

impl SegmentLegacyResolver {
    pub fn new() -> Self {
        Self
    }
}

impl LegacyRouteResolver for SegmentLegacyResolver {
    fn resolve(&self, req: &Request<Body>) -> RouteResult {
        let path = req.uri().path();
        let mut segments = path.split('/').filter(|s| !s.is_empty());

        let resource = match segments.next() {
            // A bare version segment ("v1") is not a resource.
            Some(first) if is_version_segment(first) => segments.next(),
            other => other,
        };

        match resource {
            Some(resource) => {
                let controller = format!("{}Controller", capitalize(resource));
                tracing::debug!(path, controller = %controller, "legacy rule matched");
                Ok(Route::new(controller, "handle", HashMap::new()))
            }
            None => Err(RouteError::NotFound {
                path: path.to_string(),
            }),
        }
    }
}

/// A version segment is a `v` followed by digits and dots ("v1", "v2.1").
fn is_version_segment(segment: &str) -> bool {
    match segment.strip_prefix('v') {
        Some(tag) => !tag.is_empty() && tag.bytes().all(|b| b.is_ascii_digit() || b == b'.'),
        None => false,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
