// ABOUTME: Notification route handler deriving expiration alerts on demand
// ABOUTME: Recomputes alerts from the caller's current items on every request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use crate::middleware::authenticate_request;
use crate::models::Notification;
use crate::notifications::derive_notifications;
use crate::resources::ServerResources;
use axum::{extract::State, http::HeaderMap, routing::get, Json, Router};
use std::sync::Arc;

/// Notification routes container
pub struct NotificationRoutes;

impl NotificationRoutes {
    /// Create notification routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/notifications", get(Self::list_notifications))
            .with_state(resources)
    }

    async fn list_notifications(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Json<Vec<Notification>>, AppError> {
        let user = authenticate_request(&headers, &resources.auth).await?;
        let items = resources.pantry.list(&user.id).await?;
        Ok(Json(derive_notifications(&items, resources.today())))
    }
}
