//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Parse the version prefix off the request path
//! - Scan the ordered rule table for a path + verb match
//! - Fall back to the legacy resolver for unversioned paths
//! - Classify failures (404 vs 415)
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) ordered rule scan (acceptable for typical rule counts)
//! - A mismatched version tag fails closed; it is never sent to legacy
//! - Explicit typed errors rather than silent defaults

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;

use crate::config::schema::RouterConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::routing::error::{RouteError, RouteResult};
use crate::routing::legacy::LegacyRouteResolver;
use crate::routing::route::Route;
use crate::routing::rule::Rule;

/// Route selector for one mounted API version.
///
/// Holds the version tag it serves, an ordered rule table, and a shared
/// legacy resolver for unversioned paths. Construct once at startup and
/// share freely; lookup is a pure function of the request.
#[derive(Debug)]
pub struct VersionedRouter {
    version: String,
    rules: Vec<Rule>,
    legacy: Arc<dyn LegacyRouteResolver>,
}

impl VersionedRouter {
    /// Create a router from already-compiled rules.
    pub fn new(
        version: impl Into<String>,
        rules: Vec<Rule>,
        legacy: Arc<dyn LegacyRouteResolver>,
    ) -> Self {
        Self {
            version: version.into(),
            rules,
            legacy,
        }
    }

    /// Build a router from a validated configuration, compiling each
    /// rule once.
    pub fn from_config(
        config: &RouterConfig,
        legacy: Arc<dyn LegacyRouteResolver>,
    ) -> Result<Self, Vec<ValidationError>> {
        validate_config(config)?;

        let mut rules = Vec::with_capacity(config.rules.len());
        for (idx, rule) in config.rules.iter().enumerate() {
            let verbs = match &rule.verbs {
                Some(verbs) => {
                    let mut parsed = Vec::with_capacity(verbs.len());
                    for verb in verbs {
                        let method = verb.to_ascii_uppercase().parse().map_err(|_| {
                            vec![ValidationError::UnknownVerb {
                                rule: idx,
                                verb: verb.clone(),
                            }]
                        })?;
                        parsed.push(method);
                    }
                    Some(parsed)
                }
                None => None,
            };
            let compiled = Rule::new(&rule.path, &rule.controller, &rule.action, verbs)
                .map_err(|err| {
                    vec![ValidationError::InvalidPattern {
                        rule: idx,
                        reason: err.to_string(),
                    }]
                })?;
            rules.push(compiled);
        }

        Ok(Self::new(&config.version, rules, legacy))
    }

    /// Version tag this router serves.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Select the route for a request.
    ///
    /// Paths shaped `/v<tag>/<rest>` are matched against the rule table
    /// when `<tag>` equals this router's version, and fail closed with
    /// 404 when it does not. Paths without a recognizable version prefix
    /// go to the legacy resolver, as do versioned paths no rule path
    /// matches. A path match whose rule rejects the verb keeps scanning;
    /// only when no rule at that path admits the verb does the lookup
    /// fail with 415.
    pub fn route(&self, req: &Request<Body>) -> RouteResult {
        let path = req.uri().path();

        let (tag, remainder) = match split_version(path) {
            Some(parts) => parts,
            None => {
                tracing::debug!(path, "no version prefix, delegating to legacy resolver");
                return self.legacy.resolve(req);
            }
        };

        if tag != self.version {
            tracing::debug!(path, requested = tag, serving = %self.version, "version tag mismatch");
            return Err(RouteError::NotFound {
                path: path.to_string(),
            });
        }

        let mut path_matched = false;
        for rule in &self.rules {
            let Some(params) = rule.match_path(remainder) else {
                continue;
            };
            if rule.allows(req.method()) {
                tracing::debug!(
                    path,
                    controller = rule.controller(),
                    action = rule.action(),
                    "rule matched"
                );
                return Ok(Route::new(rule.controller(), rule.action(), params));
            }
            // Path recognized, verb rejected; a later rule may still accept.
            path_matched = true;
        }

        if path_matched {
            tracing::debug!(path, method = %req.method(), "path matched but no rule admits method");
            Err(RouteError::MethodNotSupported {
                method: req.method().clone(),
                path: path.to_string(),
            })
        } else {
            tracing::debug!(path, "no versioned rule matched, delegating to legacy resolver");
            self.legacy.resolve(req)
        }
    }
}

/// Split `/v<tag>/<rest>` into the version tag and the remaining path.
///
/// Returns `None` when the path carries no recognizable version prefix:
/// no `/v`, a tag with characters other than digits and dots, or an
/// empty remainder.
fn split_version(path: &str) -> Option<(&str, &str)> {
    let rest = path.strip_prefix("/v")?;
    let slash = rest.find('/')?;
    let (tag, remainder) = rest.split_at(slash);
    if tag.is_empty() || !tag.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    if remainder == "/" {
        return None;
    }
    Some((tag, remainder))
}
