// ABOUTME: Account registration, login and session lookup business logic
// ABOUTME: Normalizes emails, validates credentials and resolves session tokens to users
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::auth::{hash_password, verify_password, AuthManager};
use crate::constants::{error_messages, MIN_PASSWORD_LENGTH};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{User, UserInfo};
use crate::store::Database;
use serde::Deserialize;

/// Email and password submitted to register or log in
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credentials {
    /// Login email
    pub email: Option<String>,
    /// Plain-text password
    pub password: Option<String>,
}

/// Logged-in user plus the token to put in the session cookie
#[derive(Debug, Clone)]
pub struct Session {
    /// Public user fields
    pub user: UserInfo,
    /// Signed session token
    pub token: String,
}

/// Authentication service for business logic
#[derive(Clone)]
pub struct AuthService {
    database: Database,
    auth_manager: AuthManager,
}

impl AuthService {
    /// Service over `database`, signing sessions with `auth_manager`
    #[must_use]
    pub const fn new(database: Database, auth_manager: AuthManager) -> Self {
        Self {
            database,
            auth_manager,
        }
    }

    /// Token signer used by this service
    #[must_use]
    pub const fn auth_manager(&self) -> &AuthManager {
        &self.auth_manager
    }

    /// Create an account and open a session
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank or malformed email or a short
    /// password, and `ResourceAlreadyExists` for a taken email
    pub async fn register(&self, credentials: Credentials) -> AppResult<Session> {
        let email = credentials
            .email
            .as_deref()
            .map(normalize_email)
            .unwrap_or_default();
        let password = credentials.password.unwrap_or_default();

        if email.is_empty() || !Self::is_valid_password(&password) {
            return Err(AppError::invalid_input(
                error_messages::INVALID_REGISTRATION,
            ));
        }
        if !Self::is_valid_email(&email) {
            return Err(AppError::invalid_input(
                error_messages::INVALID_EMAIL_FORMAT,
            ));
        }

        tracing::info!("User registration attempt for email: {}", email);

        if self.database.get_user_by_email(&email).await?.is_some() {
            return Err(AppError::already_exists(
                error_messages::USER_ALREADY_EXISTS,
            ));
        }

        let password_hash = hash_password(password).await?;
        let user = self
            .database
            .create_user(User::new(email, password_hash))
            .await?;

        AppLogger::log_auth_event(&user.id, "register", true, None);
        self.open_session(&user)
    }

    /// Verify credentials and open a session
    ///
    /// # Errors
    ///
    /// Returns `AuthInvalid` when the email is unknown or the password is wrong
    pub async fn login(&self, credentials: Credentials) -> AppResult<Session> {
        let email = credentials
            .email
            .as_deref()
            .map(normalize_email)
            .unwrap_or_default();
        let password = credentials.password.unwrap_or_default();

        let Some(user) = self.database.get_user_by_email(&email).await? else {
            tracing::warn!("Login attempt for unknown email: {}", email);
            return Err(AppError::auth_invalid(error_messages::INVALID_CREDENTIALS));
        };

        if !verify_password(password, user.password_hash.clone()).await? {
            AppLogger::log_auth_event(&user.id, "login", false, Some("invalid password"));
            return Err(AppError::auth_invalid(error_messages::INVALID_CREDENTIALS));
        }

        AppLogger::log_auth_event(&user.id, "login", true, None);
        self.open_session(&user)
    }

    /// Resolve a session token to its user
    ///
    /// # Errors
    ///
    /// Returns `AuthInvalid` if the token does not verify or its user no
    /// longer exists
    pub async fn user_for_token(&self, token: &str) -> AppResult<User> {
        let claims = self.auth_manager.validate_token(token).map_err(|e| {
            AppLogger::log_security_event("invalid_session_token", "low", &e.to_string(), None);
            AppError::auth_invalid(error_messages::TOKEN_FAILED).with_source(e)
        })?;

        self.database
            .get_user(&claims.sub)
            .await?
            .ok_or_else(|| AppError::auth_invalid(error_messages::USER_NOT_FOUND))
    }

    fn open_session(&self, user: &User) -> AppResult<Session> {
        Ok(Session {
            user: UserInfo::from(user),
            token: self.auth_manager.generate_token(user)?,
        })
    }

    /// `local@domain` with both parts non-empty and no whitespace
    #[must_use]
    pub fn is_valid_email(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };
        !local.is_empty()
            && !domain.is_empty()
            && !domain.contains('@')
            && !email.chars().any(char::is_whitespace)
    }

    /// At least the minimum password length, counted in characters
    #[must_use]
    pub fn is_valid_password(password: &str) -> bool {
        password.chars().count() >= MIN_PASSWORD_LENGTH
    }
}

/// Emails are compared trimmed and lower-cased
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
