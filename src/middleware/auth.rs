// ABOUTME: Session authentication for protected HTTP routes
// ABOUTME: Resolves the session cookie or bearer token on a request to its user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{error_messages, session};
use crate::errors::{AppError, AppResult};
use crate::models::User;
use crate::security::cookies::get_cookie_value;
use crate::services::AuthService;
use axum::http::{header::AUTHORIZATION, HeaderMap};

/// Session token carried by a request
///
/// The `token` cookie is preferred; an `Authorization: Bearer` header is
/// accepted for non-browser clients.
#[must_use]
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = get_cookie_value(headers, session::COOKIE_NAME) {
        if !token.is_empty() {
            return Some(token);
        }
    }

    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
}

/// Authenticate a request and load its user
///
/// # Errors
///
/// Returns `AuthRequired` when no token is present, and `AuthInvalid` when
/// the token does not verify or its user is gone
#[tracing::instrument(skip_all, fields(user_id = tracing::field::Empty))]
pub async fn authenticate_request(headers: &HeaderMap, auth: &AuthService) -> AppResult<User> {
    let Some(token) = extract_session_token(headers) else {
        tracing::debug!("Rejected request without session token");
        return Err(AppError::auth_required(error_messages::NO_TOKEN));
    };

    let user = auth.user_for_token(&token).await?;
    tracing::Span::current().record("user_id", user.id.as_str());
    Ok(user)
}
