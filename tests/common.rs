// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory server resources, a fixed clock and a scripted recipe generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `pantry_tracker`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use pantry_tracker::{
    config::environment::{
        AuthConfig, CorsConfig, DatabaseConfig, Environment, RecipeConfig, ServerConfig,
    },
    errors::{AppError, AppResult},
    expiration::FixedClock,
    resources::ServerResources,
    services::RecipeGenerator,
    store::Database,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Day every test clock is pinned to
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

/// Configuration for tests: testing environment, no CORS, no API key
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_owned(),
        http_port: 0,
        log_level: "warn".to_owned(),
        environment: Environment::Testing,
        database: DatabaseConfig {
            path: "unused.json".into(),
        },
        auth: AuthConfig {
            jwt_secret: "test-secret-for-integration-tests".to_owned(),
            jwt_expiry_days: 30,
            secure_cookies: false,
        },
        cors: CorsConfig::default(),
        recipes: RecipeConfig {
            gemini_api_key: None,
            model: "test-model".to_owned(),
            timeout_secs: 5,
        },
        static_dir: None,
    }
}

/// Recipe generator returning scripted output and counting its calls
pub struct ScriptedGenerator {
    response: Mutex<AppResult<String>>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    last_ingredients: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    /// Generator that answers `raw`
    pub fn replying(raw: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Mutex::new(Ok(raw.to_owned())),
            delay: None,
            calls: AtomicUsize::new(0),
            last_ingredients: Mutex::new(Vec::new()),
        })
    }

    /// Generator that fails with `error`
    pub fn failing(error: AppError) -> Arc<Self> {
        Arc::new(Self {
            response: Mutex::new(Err(error)),
            delay: None,
            calls: AtomicUsize::new(0),
            last_ingredients: Mutex::new(Vec::new()),
        })
    }

    /// Generator that answers `raw` only after `delay`
    pub fn slow(raw: &str, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            response: Mutex::new(Ok(raw.to_owned())),
            delay: Some(delay),
            calls: AtomicUsize::new(0),
            last_ingredients: Mutex::new(Vec::new()),
        })
    }

    /// Number of `generate` calls so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Ingredients passed on the most recent call
    pub fn last_ingredients(&self) -> Vec<String> {
        self.last_ingredients.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecipeGenerator for ScriptedGenerator {
    async fn generate(&self, ingredients: &[String]) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_ingredients.lock().unwrap() = ingredients.to_vec();

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &*self.response.lock().unwrap() {
            Ok(raw) => Ok(raw.clone()),
            Err(e) => Err(AppError::new(e.code, e.message.clone())),
        }
    }
}

/// Two recipes, fenced the way models usually answer
pub const SAMPLE_RECIPES: &str = r#"```json
[
  {"recipeName": "Tomato Omelette", "description": "Quick breakfast", "ingredients": ["2 eggs", "1 tomato"], "instructions": ["Whisk", "Cook"]},
  {"recipeName": "Fried Rice", "description": "Uses leftovers", "ingredients": ["rice", "eggs"], "instructions": ["Fry"]}
]
```"#;

/// Resources over an in-memory store with the test clock
pub fn create_test_resources_with(
    database: Database,
    generator: Arc<dyn RecipeGenerator>,
) -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::new(
        Arc::new(test_config()),
        database,
        generator,
        Arc::new(FixedClock(test_today())),
    ))
}

/// Resources over a fresh in-memory store
pub fn create_test_resources(generator: Arc<dyn RecipeGenerator>) -> Arc<ServerResources> {
    create_test_resources_with(Database::in_memory(), generator)
}
