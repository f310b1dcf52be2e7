// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses bind address, storage path, session secret, CORS and recipe generator settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use crate::constants::{defaults, env_vars, session};
use crate::logging::LoggingConfig;
use anyhow::{bail, Context, Result};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Deployed service
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a development environment
    #[must_use]
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(&self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Top level server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Log filter directive, as handed to the tracing subscriber
    pub log_level: String,
    /// Deployment environment
    pub environment: Environment,
    /// Document store configuration
    pub database: DatabaseConfig,
    /// Session configuration
    pub auth: AuthConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Recipe generator configuration
    pub recipes: RecipeConfig,
    /// Directory of the prebuilt frontend, served with an `index.html` fallback
    pub static_dir: Option<PathBuf>,
}

/// Document store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path of the JSON document
    pub path: PathBuf,
}

/// Session configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: String,
    /// Session lifetime in days
    pub jwt_expiry_days: i64,
    /// Mark the session cookie `Secure`
    pub secure_cookies: bool,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiry_days", &self.jwt_expiry_days)
            .field("secure_cookies", &self.secure_cookies)
            .finish()
    }
}

/// CORS configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Explicit allowed origins; empty disables cross-origin access
    pub allowed_origins: Vec<String>,
}

/// Recipe generator configuration
#[derive(Clone)]
pub struct RecipeConfig {
    /// Gemini API key; recipe generation fails without it
    pub gemini_api_key: Option<String>,
    /// Gemini model name
    pub model: String,
    /// Deadline for one generation call in seconds
    pub timeout_secs: u64,
}

impl fmt::Debug for RecipeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecipeConfig")
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse, or if
    /// `JWT_SECRET` is missing in production
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let environment = env_var(env_vars::ENVIRONMENT)
            .or_else(|| env_var(env_vars::NODE_ENV))
            .map_or_else(Environment::default, |value| {
                Environment::from_str_or_default(&value)
            });

        let default_database_path = if environment.is_production() {
            defaults::PRODUCTION_DATABASE_PATH
        } else {
            defaults::DATABASE_PATH
        };

        let jwt_secret = match env_var(env_vars::JWT_SECRET) {
            Some(secret) => secret,
            None if environment.is_production() => {
                bail!("{} must be set in production", env_vars::JWT_SECRET)
            }
            None => {
                warn!(
                    "{} not set, generated a random secret; sessions will not survive a restart",
                    env_vars::JWT_SECRET
                );
                generate_jwt_secret()
            }
        };

        let allowed_origins = env_var(env_vars::CORS_ALLOWED_ORIGINS).map_or_else(
            || {
                if environment.is_development() {
                    vec![defaults::DEVELOPMENT_CORS_ORIGIN.to_owned()]
                } else {
                    Vec::new()
                }
            },
            |value| parse_origins(&value),
        );

        let config = Self {
            host: env_var(env_vars::HOST).unwrap_or_else(|| defaults::HOST.to_owned()),
            http_port: parse_env(env_vars::PORT, defaults::HTTP_PORT)?,
            log_level: LoggingConfig::from_env().level,
            environment,
            database: DatabaseConfig {
                path: env_var(env_vars::DATABASE_PATH)
                    .map_or_else(|| PathBuf::from(default_database_path), PathBuf::from),
            },
            auth: AuthConfig {
                jwt_secret,
                jwt_expiry_days: parse_env(env_vars::JWT_EXPIRY_DAYS, defaults::JWT_EXPIRY_DAYS)?,
                secure_cookies: !environment.is_development(),
            },
            cors: CorsConfig { allowed_origins },
            recipes: RecipeConfig {
                gemini_api_key: env_var(env_vars::GEMINI_API_KEY),
                model: env_var(env_vars::GEMINI_MODEL)
                    .unwrap_or_else(|| defaults::GEMINI_MODEL.to_owned()),
                timeout_secs: parse_env(
                    env_vars::RECIPE_TIMEOUT_SECS,
                    defaults::RECIPE_TIMEOUT_SECS,
                )?,
            },
            static_dir: env_var(env_vars::STATIC_DIR).map(PathBuf::from),
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error for values that would make the server unusable
    pub fn validate(&self) -> Result<()> {
        if self.auth.jwt_expiry_days <= 0 {
            bail!("{} must be a positive number of days", env_vars::JWT_EXPIRY_DAYS);
        }

        if self.auth.jwt_expiry_days > session::MAX_JWT_EXPIRY_DAYS {
            bail!(
                "{} must be at most {} days",
                env_vars::JWT_EXPIRY_DAYS,
                session::MAX_JWT_EXPIRY_DAYS
            );
        }

        if self.recipes.timeout_secs == 0 {
            bail!("{} must be greater than zero", env_vars::RECIPE_TIMEOUT_SECS);
        }

        if self.recipes.gemini_api_key.is_none() {
            warn!(
                "{} not set, recipe generation will fail",
                env_vars::GEMINI_API_KEY
            );
        }

        Ok(())
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Pantry Server Configuration:\n\
             - Environment: {}\n\
             - Bind: {}:{}\n\
             - Log Level: {}\n\
             - Database: {}\n\
             - Session Lifetime: {} days\n\
             - Secure Cookies: {}\n\
             - CORS Origins: {}\n\
             - Recipe Model: {}\n\
             - Recipe Generation: {}\n\
             - Static Files: {}",
            self.environment,
            self.host,
            self.http_port,
            self.log_level,
            self.database.path.display(),
            self.auth.jwt_expiry_days,
            self.auth.secure_cookies,
            if self.cors.allowed_origins.is_empty() {
                "none".to_owned()
            } else {
                self.cors.allowed_origins.join(", ")
            },
            self.recipes.model,
            if self.recipes.gemini_api_key.is_some() {
                "Enabled"
            } else {
                "Disabled"
            },
            self.static_dir
                .as_ref()
                .map_or_else(|| "disabled".to_owned(), |dir| dir.display().to_string()),
        )
    }
}

/// Non-empty environment variable
fn env_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    env_var(key).map_or(Ok(default), |value| {
        value
            .parse()
            .with_context(|| format!("Invalid {key} value: {value}"))
    })
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    origins_str
        .split(',')
        .map(|s| s.trim().trim_end_matches('/').to_owned())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Random 512-bit secret, hex encoded
fn generate_jwt_secret() -> String {
    let mut bytes = [0_u8; 64];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins("http://localhost:5173, https://pantry.example.com/ ,"),
            vec!["http://localhost:5173", "https://pantry.example.com"]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("PROD"),
            Environment::Production
        );
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(
            Environment::from_str_or_default("staging"),
            Environment::Development
        );
    }

    #[test]
    fn test_generated_secret_is_random_hex() {
        let first = generate_jwt_secret();
        let second = generate_jwt_secret();
        assert_eq!(first.len(), 128);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(first, second);
    }

    #[test]
    fn test_auth_config_debug_redacts_secret() {
        let auth = AuthConfig {
            jwt_secret: "super-secret".into(),
            jwt_expiry_days: 30,
            secure_cookies: true,
        };
        let rendered = format!("{auth:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("REDACTED"));
    }
}
