//! Route rules and path pattern evaluation.
//!
//! # Responsibilities
//! - Classify configured paths (literal vs pattern) at construction
//! - Compile pattern paths as anchored regexes with named capture groups
//! - Evaluate a rule against a request path and extract parameters
//!
//! # Design Decisions
//! - Classification happens once, at construction, not per request
//! - Patterns are anchored at both ends to avoid partial-prefix matches
//! - A rule without a verb list accepts every HTTP method

use std::collections::HashMap;

use axum::http::Method;
use regex::Regex;

/// Bytes that mark a configured path as a regex pattern rather than a
/// literal path.
const META: &[u8] = br"\^$.|?*+()[]{}";

/// How a rule's path is matched against the request path.
#[derive(Debug, Clone)]
pub enum PathPattern {
    /// Exact string equality.
    Literal(String),
    /// Anchored regex match; named groups populate the param map.
    Pattern(Regex),
}

impl PathPattern {
    /// Classify and compile a configured path.
    ///
    /// Paths containing no regex metacharacters stay literal. Everything
    /// else compiles as a regex anchored at both ends; a trailing `$`
    /// already present in the path is honored rather than doubled.
    pub fn compile(path: &str) -> Result<Self, regex::Error> {
        if !path.bytes().any(|b| META.contains(&b)) {
            return Ok(PathPattern::Literal(path.to_string()));
        }
        let body = match path.strip_suffix('$') {
            Some(head) if !head.ends_with('\\') => head,
            _ => path,
        };
        let regex = Regex::new(&format!("^{}$", body))?;
        Ok(PathPattern::Pattern(regex))
    }

    /// Match a request path, returning captured parameters on success.
    /// Literal paths capture nothing.
    pub fn match_path(&self, path: &str) -> Option<HashMap<String, String>> {
        match self {
            PathPattern::Literal(literal) => (literal == path).then(HashMap::new),
            PathPattern::Pattern(regex) => {
                let caps = regex.captures(path)?;
                let mut params = HashMap::new();
                for name in regex.capture_names().flatten() {
                    if let Some(value) = caps.name(name) {
                        params.insert(name.to_string(), value.as_str().to_string());
                    }
                }
                Some(params)
            }
        }
    }
}

/// One entry of a router's ordered rule table, immutable after
/// construction.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: PathPattern,
    controller: String,
    action: String,
    verbs: Option<Vec<Method>>,
}

impl Rule {
    /// Create a rule from a configured path. Fails if the path is a
    /// pattern that does not compile.
    pub fn new(
        path: &str,
        controller: impl Into<String>,
        action: impl Into<String>,
        verbs: Option<Vec<Method>>,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: PathPattern::compile(path)?,
            controller: controller.into(),
            action: action.into(),
            verbs,
        })
    }

    /// Match the request path against this rule's pattern.
    pub fn match_path(&self, path: &str) -> Option<HashMap<String, String>> {
        self.pattern.match_path(path)
    }

    /// Returns true if this rule accepts the request method.
    pub fn allows(&self, method: &Method) -> bool {
        match &self.verbs {
            Some(verbs) => verbs.contains(method),
            None => true,
        }
    }

    /// Controller identifier this rule resolves to.
    pub fn controller(&self) -> &str {
        &self.controller
    }

    /// Action identifier this rule resolves to.
    pub fn action(&self) -> &str {
        &self.action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_classification() {
        let pattern = PathPattern::compile("/events").unwrap();
        assert!(matches!(pattern, PathPattern::Literal(_)));

        let pattern = PathPattern::compile(r"/events/(?P<event_id>\d+)$").unwrap();
        assert!(matches!(pattern, PathPattern::Pattern(_)));
    }

    #[test]
    fn test_literal_match_is_exact() {
        let pattern = PathPattern::compile("/events").unwrap();
        assert_eq!(pattern.match_path("/events"), Some(HashMap::new()));
        assert_eq!(pattern.match_path("/events/10"), None);
        assert_eq!(pattern.match_path("/eventful"), None);
    }

    #[test]
    fn test_pattern_captures_named_groups() {
        let pattern = PathPattern::compile(r"/events/(?P<event_id>\d+)$").unwrap();
        let params = pattern.match_path("/events/10").unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params["event_id"], "10");
    }

    #[test]
    fn test_pattern_anchored_both_ends() {
        let pattern = PathPattern::compile(r"/events/(?P<event_id>\d+)$").unwrap();
        assert!(pattern.match_path("/events/10/comments").is_none());
        assert!(pattern.match_path("/old/events/10").is_none());

        // No trailing $ in the config; still anchored.
        let pattern = PathPattern::compile(r"/events/(?P<event_id>\d+)").unwrap();
        assert!(pattern.match_path("/events/10/comments").is_none());
        assert!(pattern.match_path("/events/10").is_some());
    }

    #[test]
    fn test_pattern_multiple_groups() {
        let pattern =
            PathPattern::compile(r"/events/(?P<event_id>\d+)/tickets/(?P<ticket_id>\d+)$").unwrap();
        let params = pattern.match_path("/events/7/tickets/42").unwrap();
        assert_eq!(params["event_id"], "7");
        assert_eq!(params["ticket_id"], "42");
    }

    #[test]
    fn test_broken_pattern_rejected() {
        assert!(PathPattern::compile("/events/(?P<id>").is_err());
    }

    #[test]
    fn test_rule_allows() {
        let unrestricted = Rule::new("/events", "EventController", "list", None).unwrap();
        assert!(unrestricted.allows(&Method::GET));
        assert!(unrestricted.allows(&Method::DELETE));

        let restricted = Rule::new(
            "/events",
            "EventController",
            "create",
            Some(vec![Method::POST, Method::PUT]),
        )
        .unwrap();
        assert!(restricted.allows(&Method::POST));
        assert!(!restricted.allows(&Method::GET));
    }
}
