// ABOUTME: Recipe suggestion route handler
// ABOUTME: Sends the caller's pantry to the recipe generator and relays the parsed recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use crate::logging::AppLogger;
use crate::middleware::authenticate_request;
use crate::models::Recipe;
use crate::resources::ServerResources;
use axum::{extract::State, http::HeaderMap, routing::post, Json, Router};
use std::sync::Arc;
use std::time::Instant;

/// Recipe routes container
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/recipes/generate", post(Self::generate_recipes))
            .with_state(resources)
    }

    async fn generate_recipes(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Json<Vec<Recipe>>, AppError> {
        let user = authenticate_request(&headers, &resources.auth).await?;
        let items = resources.pantry.list(&user.id).await?;

        let started = Instant::now();
        let result = resources.recipes.suggest(&items).await;
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        AppLogger::log_recipe_generation(&user.id, items.len(), result.is_ok(), duration_ms);

        Ok(Json(result?))
    }
}
