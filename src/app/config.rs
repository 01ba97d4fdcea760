//! Backend connection configuration read at startup.

use std::env;
use thiserror::Error;

/// Environment variable naming the backend project.
pub const PROJECT_ID_VAR: &str = "PEGBOARD_PROJECT_ID";

/// Environment variable holding the backend API key.
pub const API_KEY_VAR: &str = "PEGBOARD_API_KEY";

/// Errors raised while reading the backend configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is absent or not valid Unicode.
    #[error("missing required configuration variable {0}")]
    MissingVariable(&'static str),

    /// A required variable is present but empty.
    #[error("configuration variable {0} is empty")]
    EmptyVariable(&'static str),
}

/// Connection settings for the hosted backend.
///
/// There is no designed fallback: startup without both values is a
/// configuration error, never a silently degraded mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    project_id: String,
    api_key: String,
}

impl BackendConfig {
    /// Builds a configuration from explicit values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyVariable`] when either value is blank.
    pub fn new(
        project_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let project_id = project_id.into();
        if project_id.trim().is_empty() {
            return Err(ConfigError::EmptyVariable(PROJECT_ID_VAR));
        }
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::EmptyVariable(API_KEY_VAR));
        }
        Ok(Self {
            project_id,
            api_key,
        })
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVariable`] when a variable is absent
    /// and [`ConfigError::EmptyVariable`] when one is blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let project_id =
            env::var(PROJECT_ID_VAR).map_err(|_| ConfigError::MissingVariable(PROJECT_ID_VAR))?;
        let api_key =
            env::var(API_KEY_VAR).map_err(|_| ConfigError::MissingVariable(API_KEY_VAR))?;
        Self::new(project_id, api_key)
    }

    /// Returns the backend project identifier.
    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the backend API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}
