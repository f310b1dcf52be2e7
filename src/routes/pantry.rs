// ABOUTME: Pantry item route handlers for listing, creating, updating and deleting items
// ABOUTME: Thin wrappers that authenticate the caller and delegate to the pantry service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use crate::logging::AppLogger;
use crate::middleware::authenticate_request;
use crate::models::{FoodItem, FoodItemUpdate, NewFoodItem};
use crate::resources::ServerResources;
use crate::routes::auth::MessageResponse;
use crate::routes::{AppJson, AppQuery};
use crate::services::{PantryFilter, PantryItemView};
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, put},
    Json, Router,
};
use std::sync::Arc;

/// Pantry routes container
pub struct PantryRoutes;

impl PantryRoutes {
    /// Create all pantry routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/pantry", get(Self::list_items).post(Self::create_item))
            .route(
                "/api/pantry/:id",
                put(Self::update_item).delete(Self::delete_item),
            )
            .with_state(resources)
    }

    /// Caller's items with their current expiration status
    async fn list_items(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        AppQuery(filter): AppQuery<PantryFilter>,
    ) -> Result<Json<Vec<PantryItemView>>, AppError> {
        let user = authenticate_request(&headers, &resources.auth).await?;
        let today = resources.today();

        let items = resources
            .pantry
            .list_filtered(&user.id, &filter)
            .await?
            .into_iter()
            .map(|item| PantryItemView::new(item, today))
            .collect();

        Ok(Json(items))
    }

    async fn create_item(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        AppJson(input): AppJson<NewFoodItem>,
    ) -> Result<(StatusCode, Json<FoodItem>), AppError> {
        let user = authenticate_request(&headers, &resources.auth).await?;
        let item = resources.pantry.create(&user.id, input).await?;
        AppLogger::log_pantry_event(&user.id, "create", &item.id);
        Ok((StatusCode::CREATED, Json(item)))
    }

    async fn update_item(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(item_id): Path<String>,
        AppJson(update): AppJson<FoodItemUpdate>,
    ) -> Result<Json<FoodItem>, AppError> {
        let user = authenticate_request(&headers, &resources.auth).await?;
        let item = resources.pantry.update(&user.id, &item_id, update).await?;
        AppLogger::log_pantry_event(&user.id, "update", &item.id);
        Ok(Json(item))
    }

    async fn delete_item(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(item_id): Path<String>,
    ) -> Result<Json<MessageResponse>, AppError> {
        let user = authenticate_request(&headers, &resources.auth).await?;
        resources.pantry.delete(&user.id, &item_id).await?;
        AppLogger::log_pantry_event(&user.id, "delete", &item_id);
        Ok(Json(MessageResponse {
            message: "Item deleted".to_owned(),
        }))
    }
}
