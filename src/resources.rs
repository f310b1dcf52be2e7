// ABOUTME: Centralized resource container shared by every route handler
// ABOUTME: Builds the store-backed services once so handlers only clone an Arc
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::auth::AuthManager;
use crate::config::environment::ServerConfig;
use crate::expiration::Clock;
use crate::security::headers::SecurityHeadersConfig;
use crate::services::{AuthService, PantryService, RecipeGenerator, RecipeService};
use crate::store::Database;
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;

/// Shared server state handed to every router via `with_state`
#[derive(Clone)]
pub struct ServerResources {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Document store
    pub database: Database,
    /// Session token signer
    pub auth_manager: AuthManager,
    /// Accounts and sessions
    pub auth: AuthService,
    /// Pantry item CRUD
    pub pantry: PantryService,
    /// Recipe suggestions
    pub recipes: RecipeService,
    /// Response security headers
    pub security_headers: Arc<SecurityHeadersConfig>,
    clock: Arc<dyn Clock>,
}

impl ServerResources {
    /// Wire the services over `database`
    #[must_use]
    pub fn new(
        config: Arc<ServerConfig>,
        database: Database,
        generator: Arc<dyn RecipeGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let auth_manager = AuthManager::new(
            config.auth.jwt_secret.as_bytes(),
            config.auth.jwt_expiry_days,
        );
        let auth = AuthService::new(database.clone(), auth_manager.clone());
        let pantry = PantryService::new(database.clone());
        let recipes = RecipeService::new(
            generator,
            Duration::from_secs(config.recipes.timeout_secs),
        );
        let security_headers = Arc::new(SecurityHeadersConfig::for_environment(config.environment));

        Self {
            config,
            database,
            auth_manager,
            auth,
            pantry,
            recipes,
            security_headers,
            clock,
        }
    }

    /// Today's date for expiration classification
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Whether session cookies are marked `Secure`
    #[must_use]
    pub fn secure_cookies(&self) -> bool {
        self.config.auth.secure_cookies
    }
}
