//! Sync client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `BREADBOX_GITHUB_OWNER` - Account that owns the data repository
//! - `BREADBOX_GITHUB_REPO` - Data repository name
//! - `BREADBOX_GITHUB_TOKEN` - Access token with `contents` read/write scope
//!
//! ## Optional
//! - `BREADBOX_API_BASE` - API base URL (default: <https://api.github.com>),
//!   pointed at a local fake in tests

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Default base URL of the contents API.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "your_",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    /// An environment variable is set but malformed.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    /// The access token looks like a placeholder left over from setup docs.
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Sync client configuration.
///
/// Implements `Debug` manually to redact the access token.
#[derive(Clone)]
pub struct SyncConfig {
    /// Account that owns the data repository.
    pub owner: String,
    /// Data repository name.
    pub repo: String,
    /// Access token with `contents` read/write scope.
    pub token: SecretString,
    /// API base URL, without a trailing slash.
    pub api_base: String,
}

impl std::fmt::Debug for SyncConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncConfig")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("token", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl SyncConfig {
    /// Build a configuration from explicit values, validating immediately.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any value is empty or malformed, or if the
    /// token matches a known placeholder pattern.
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            owner: owner.into(),
            repo: repo.into(),
            token: SecretString::from(token.into()),
            api_base: DEFAULT_API_BASE.to_string(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace the API base URL (used by tests to target a local fake).
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        while self.api_base.ends_with('/') {
            self.api_base.pop();
        }
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid,
    /// or if the token fails placeholder validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let owner = get_required_env("BREADBOX_GITHUB_OWNER")?;
        let repo = get_required_env("BREADBOX_GITHUB_REPO")?;
        let token = get_required_env("BREADBOX_GITHUB_TOKEN")?;
        let api_base =
            get_env_or_default("BREADBOX_API_BASE", DEFAULT_API_BASE);

        let config = Self {
            owner,
            repo,
            token: SecretString::from(token),
            api_base: String::new(),
        }
        .with_api_base(api_base);
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        validate_repo_component(&self.owner, "BREADBOX_GITHUB_OWNER")?;
        validate_repo_component(&self.repo, "BREADBOX_GITHUB_REPO")?;
        validate_token(self.token.expose_secret(), "BREADBOX_GITHUB_TOKEN")?;
        if self.api_base.is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "BREADBOX_API_BASE".to_string(),
                "must not be empty".to_string(),
            ));
        }
        if !self.api_base.starts_with("http://") && !self.api_base.starts_with("https://") {
            return Err(ConfigError::InvalidEnvVar(
                "BREADBOX_API_BASE".to_string(),
                format!("expected an http(s) URL, got {}", self.api_base),
            ));
        }
        Ok(())
    }
}

fn validate_repo_component(value: &str, var_name: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::MissingEnvVar(var_name.to_string()));
    }
    if value.contains('/') || value.contains(char::is_whitespace) {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("must be a bare name, got {value}"),
        ));
    }
    Ok(())
}

fn validate_token(token: &str, var_name: &str) -> Result<(), ConfigError> {
    if token.is_empty() {
        return Err(ConfigError::MissingEnvVar(var_name.to_string()));
    }
    let lowered = token.to_lowercase();
    for pattern in PLACEHOLDER_PATTERNS {
        if lowered.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("contains placeholder pattern '{pattern}'"),
            ));
        }
    }
    Ok(())
}

fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
