// ABOUTME: User authentication route handlers for registration, login, logout and session lookup
// ABOUTME: Issues and clears the HttpOnly session cookie around the auth service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Authentication routes
//!
//! Register and login answer with the public user fields and set the
//! session cookie. The token itself never appears in a response body.

use crate::errors::AppError;
use crate::middleware::authenticate_request;
use crate::models::UserInfo;
use crate::resources::ServerResources;
use crate::routes::AppJson;
use crate::security::cookies::{clear_session_cookie, set_session_cookie};
use crate::services::{Credentials, Session};
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

/// Plain confirmation body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}

/// Authentication routes container
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all authentication routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/auth/register", post(Self::register))
            .route("/api/auth/login", post(Self::login))
            .route("/api/auth/logout", post(Self::logout))
            .route("/api/auth/me", get(Self::me))
            .with_state(resources)
    }

    fn session_response(
        resources: &ServerResources,
        status: StatusCode,
        session: Session,
    ) -> Result<impl IntoResponse, AppError> {
        let mut headers = HeaderMap::new();
        set_session_cookie(
            &mut headers,
            &session.token,
            resources.auth_manager.token_lifetime_secs()?,
            resources.secure_cookies(),
        );
        Ok((status, headers, Json(session.user)))
    }

    /// Handle user registration
    async fn register(
        State(resources): State<Arc<ServerResources>>,
        AppJson(credentials): AppJson<Credentials>,
    ) -> Result<impl IntoResponse, AppError> {
        let session = resources.auth.register(credentials).await?;
        tracing::info!(user_id = %session.user.id, "User registered");
        Self::session_response(&resources, StatusCode::CREATED, session)
    }

    /// Handle user login
    async fn login(
        State(resources): State<Arc<ServerResources>>,
        AppJson(credentials): AppJson<Credentials>,
    ) -> Result<impl IntoResponse, AppError> {
        let session = resources.auth.login(credentials).await?;
        Self::session_response(&resources, StatusCode::OK, session)
    }

    /// Expire the session cookie
    async fn logout(State(resources): State<Arc<ServerResources>>) -> impl IntoResponse {
        let mut headers = HeaderMap::new();
        clear_session_cookie(&mut headers, resources.secure_cookies());
        (
            headers,
            Json(MessageResponse {
                message: "Logged out successfully".to_owned(),
            }),
        )
    }

    /// Current user for the session
    async fn me(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Json<UserInfo>, AppError> {
        let user = authenticate_request(&headers, &resources.auth).await?;
        Ok(Json(UserInfo::from(&user)))
    }
}
