// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Accounts, pantry item lifecycle and recipe suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Route handlers stay thin: they authenticate, extract input and delegate
//! to these services, which own validation and ownership rules.

/// Registration, login and session lookup
pub mod auth;

/// Pantry item CRUD with ownership enforcement
pub mod pantry;

/// Recipe request building and generator invocation
pub mod recipes;

pub use auth::{AuthService, Credentials, Session};
pub use pantry::{PantryFilter, PantryItemView, PantryService};
pub use recipes::{
    build_ingredient_list, parse_recipes, recipe_generator_from_config, LlmRecipeGenerator,
    RecipeGenerator, RecipeService, UnconfiguredRecipeGenerator,
};
