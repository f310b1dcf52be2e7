// ABOUTME: System-wide constants and configuration defaults for the pantry server
// ABOUTME: Environment variable names, default ports and paths, session cookie settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Hardcoded defaults and the names of the environment variables that
//! override them. User-facing error messages live in `pantry_core` and are
//! re-exported here.

pub use pantry_core::constants::{error_messages, MIN_PASSWORD_LENGTH, SOON_THRESHOLD_DAYS};

/// Service identity used in logs
pub mod service_names {
    /// Name of the HTTP server
    pub const PANTRY_SERVER: &str = "pantry-server";
}

/// Environment variable names
pub mod env_vars {
    /// Bind address
    pub const HOST: &str = "HOST";
    /// HTTP port
    pub const PORT: &str = "PORT";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Fallback deployment environment variable
    pub const NODE_ENV: &str = "NODE_ENV";
    /// JSON document path
    pub const DATABASE_PATH: &str = "DATABASE_PATH";
    /// Session signing secret
    pub const JWT_SECRET: &str = "JWT_SECRET";
    /// Session lifetime in days
    pub const JWT_EXPIRY_DAYS: &str = "JWT_EXPIRY_DAYS";
    /// Comma separated list of allowed CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Gemini API key
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    /// Gemini model override
    pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
    /// Deadline for a single recipe generation call
    pub const RECIPE_TIMEOUT_SECS: &str = "RECIPE_TIMEOUT_SECS";
    /// Directory of the built frontend
    pub const STATIC_DIR: &str = "STATIC_DIR";
}

/// Default values
pub mod defaults {
    /// Bind address
    pub const HOST: &str = "0.0.0.0";
    /// HTTP port
    pub const HTTP_PORT: u16 = 8080;
    /// Document path outside production
    pub const DATABASE_PATH: &str = "db.json";
    /// Document path in production (container file systems are read-only outside /tmp)
    pub const PRODUCTION_DATABASE_PATH: &str = "/tmp/db.json";
    /// Session lifetime
    pub const JWT_EXPIRY_DAYS: i64 = 30;
    /// Frontend dev server origin
    pub const DEVELOPMENT_CORS_ORIGIN: &str = "http://localhost:5173";
    /// Gemini model used for recipes
    pub const GEMINI_MODEL: &str = "gemini-1.5-flash";
    /// Recipe generation deadline
    pub const RECIPE_TIMEOUT_SECS: u64 = 60;
}

/// Session cookie settings
pub mod session {
    /// Cookie carrying the session JWT
    pub const COOKIE_NAME: &str = "token";
    /// Longest accepted session lifetime (ten years)
    pub const MAX_JWT_EXPIRY_DAYS: i64 = 3650;
}

/// Time conversions
pub mod time_constants {
    /// Seconds in one day
    pub const SECONDS_PER_DAY: i64 = 86_400;
}
