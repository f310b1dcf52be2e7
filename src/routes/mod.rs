// ABOUTME: Route module organization for the pantry tracker HTTP API
// ABOUTME: Groups route definitions by domain and provides error-mapping extractors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the pantry tracker
//!
//! Each domain module contains only route definitions and thin handler
//! functions that authenticate the caller and delegate to the service layer.

use crate::errors::AppError;
use axum::extract::{FromRequest, FromRequestParts};

/// Registration, login, logout and session lookup
pub mod auth;
/// Health check and readiness routes
pub mod health;
/// Expiration notifications
pub mod notifications;
/// Pantry item CRUD
pub mod pantry;
/// AI recipe suggestions
pub mod recipes;

pub use auth::AuthRoutes;
pub use health::HealthRoutes;
pub use notifications::NotificationRoutes;
pub use pantry::PantryRoutes;
pub use recipes::RecipeRoutes;

/// JSON body extractor whose rejection is an `INVALID_INPUT` error payload
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string extractor whose rejection is an `INVALID_INPUT` error payload
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
