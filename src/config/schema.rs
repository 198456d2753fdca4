//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for one mounted API version.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Version tag this router serves (e.g. "2.1").
    pub version: String,

    /// Ordered rule definitions mapping paths to controllers.
    pub rules: Vec<RuleConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// A single route rule.
///
/// Rules are evaluated in the order they appear in the config file;
/// the first rule whose path matches and whose verb set admits the
/// request method wins.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RuleConfig {
    /// Path to match against the request path after the version prefix
    /// is stripped. Either a literal path ("/events") or a regular
    /// expression with named capture groups ("/events/(?P<event_id>\d+)$").
    pub path: String,

    /// Controller identifier the rule resolves to.
    pub controller: String,

    /// Action identifier the rule resolves to.
    pub action: String,

    /// HTTP methods this rule accepts. Absent means all methods.
    pub verbs: Option<Vec<String>>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
