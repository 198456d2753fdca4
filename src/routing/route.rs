//! Resolved route result.

use std::collections::HashMap;

/// The outcome of a successful lookup: the controller and action to
/// dispatch to, plus any path parameters the matching rule captured.
///
/// Parameter values are always the captured text ("10", not 10);
/// callers coerce as needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    controller: String,
    action: String,
    params: HashMap<String, String>,
}

impl Route {
    /// Create a new route result.
    pub fn new(
        controller: impl Into<String>,
        action: impl Into<String>,
        params: HashMap<String, String>,
    ) -> Self {
        Self {
            controller: controller.into(),
            action: action.into(),
            params,
        }
    }

    /// Controller identifier to dispatch to.
    pub fn controller(&self) -> &str {
        &self.controller
    }

    /// Action identifier to dispatch to.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Path parameters captured by the matching rule. Empty for
    /// literal-path rules.
    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }
}
