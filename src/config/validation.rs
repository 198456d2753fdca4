//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the version tag is well formed
//! - Check rules name a controller and action
//! - Check verb lists only contain known HTTP methods
//! - Check pattern paths compile as regular expressions
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::RouterConfig;
use crate::routing::rule::PathPattern;

/// HTTP methods accepted in a rule's verb list.
const KNOWN_VERBS: &[&str] = &["GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS"];

/// A single semantic problem found in a config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyVersion,
    MalformedVersion(String),
    EmptyRulePath { rule: usize },
    MissingController { rule: usize },
    MissingAction { rule: usize },
    UnknownVerb { rule: usize, verb: String },
    InvalidPattern { rule: usize, reason: String },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyVersion => write!(f, "version tag is empty"),
            ValidationError::MalformedVersion(v) => {
                write!(f, "version tag '{}' must contain only digits and dots", v)
            }
            ValidationError::EmptyRulePath { rule } => write!(f, "rule #{}: path is empty", rule),
            ValidationError::MissingController { rule } => {
                write!(f, "rule #{}: controller is empty", rule)
            }
            ValidationError::MissingAction { rule } => write!(f, "rule #{}: action is empty", rule),
            ValidationError::UnknownVerb { rule, verb } => {
                write!(f, "rule #{}: unknown HTTP verb '{}'", rule, verb)
            }
            ValidationError::InvalidPattern { rule, reason } => {
                write!(f, "rule #{}: invalid path pattern: {}", rule, reason)
            }
        }
    }
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.version.is_empty() {
        errors.push(ValidationError::EmptyVersion);
    } else if !config
        .version
        .bytes()
        .all(|b| b.is_ascii_digit() || b == b'.')
    {
        errors.push(ValidationError::MalformedVersion(config.version.clone()));
    }

    for (idx, rule) in config.rules.iter().enumerate() {
        if rule.path.is_empty() {
            errors.push(ValidationError::EmptyRulePath { rule: idx });
        } else if let Err(err) = PathPattern::compile(&rule.path) {
            errors.push(ValidationError::InvalidPattern {
                rule: idx,
                reason: err.to_string(),
            });
        }
        if rule.controller.is_empty() {
            errors.push(ValidationError::MissingController { rule: idx });
        }
        if rule.action.is_empty() {
            errors.push(ValidationError::MissingAction { rule: idx });
        }
        if let Some(verbs) = &rule.verbs {
            for verb in verbs {
                if !KNOWN_VERBS.contains(&verb.to_ascii_uppercase().as_str()) {
                    errors.push(ValidationError::UnknownVerb {
                        rule: idx,
                        verb: verb.clone(),
                    });
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
