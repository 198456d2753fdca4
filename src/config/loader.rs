//! Configuration loading from disk.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::config::schema::RouterConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::routing::legacy::LegacyRouteResolver;
use crate::routing::router::VersionedRouter;

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RouterConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: RouterConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load a config file and build the router it describes in one step.
pub fn load_router(
    path: &Path,
    legacy: Arc<dyn LegacyRouteResolver>,
) -> Result<VersionedRouter, ConfigError> {
    let config = load_config(path)?;
    VersionedRouter::from_config(&config, legacy).map_err(ConfigError::Validation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_render_comma_separated() {
        let err = ConfigError::Validation(vec![
            ValidationError::EmptyVersion,
            ValidationError::MissingAction { rule: 0 },
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: version tag is empty, rule #0: action is empty"
        );
    }

    #[test]
    fn test_unparseable_toml_is_parse_error() {
        let result: Result<RouterConfig, _> = toml::from_str("version = [");
        let err = ConfigError::Parse(result.unwrap_err());
        assert!(err.to_string().starts_with("Parse error"));
    }
}
