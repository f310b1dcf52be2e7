// ABOUTME: HTTP integration tests for health check routes
// ABOUTME: Tests the liveness and readiness endpoints without authentication
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use common::{create_test_resources, create_test_resources_with, ScriptedGenerator};
use helpers::axum_test::AxumTestRequest;
use pantry_tracker::routes::HealthRoutes;
use pantry_tracker::store::{Database, JsonFileStore};
use serde_json::Value;
use std::sync::Arc;

#[tokio::test]
async fn test_health_endpoint() {
    let resources = create_test_resources(ScriptedGenerator::replying("[]"));
    let response = AxumTestRequest::get("/health")
        .send(HealthRoutes::routes(resources))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_ready_endpoint() {
    let resources = create_test_resources(ScriptedGenerator::replying("[]"));
    let response = AxumTestRequest::get("/ready")
        .send(HealthRoutes::routes(resources))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["storage"], "memory");
}

#[tokio::test]
async fn test_ready_fails_on_unreadable_document() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("db.json");
    std::fs::write(&path, "][").unwrap();

    let resources = create_test_resources_with(
        Database::new(Arc::new(JsonFileStore::new(path))),
        ScriptedGenerator::replying("[]"),
    );
    let response = AxumTestRequest::get("/ready")
        .send(HealthRoutes::routes(resources))
        .await;

    assert_eq!(response.status(), 500);
}
