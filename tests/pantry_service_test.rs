// ABOUTME: Integration tests for the pantry service over both document store backends
// ABOUTME: Covers persistence across reopen, legacy document fields and concurrent updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use pantry_tracker::errors::ErrorCode;
use pantry_tracker::models::{FoodItemUpdate, NewFoodItem, User};
use pantry_tracker::services::PantryService;
use pantry_tracker::store::{Database, JsonFileStore};
use std::sync::Arc;
use tempfile::TempDir;

fn new_item(name: &str, quantity: f64) -> NewFoodItem {
    NewFoodItem {
        name: Some(name.to_owned()),
        quantity: Some(quantity),
        unit: Some("pcs".to_owned()),
        category: Some("Produce".to_owned()),
        expiration_date: Some("2025-03-12".to_owned()),
    }
}

fn file_database(dir: &TempDir) -> Database {
    Database::new(Arc::new(JsonFileStore::new(dir.path().join("db.json"))))
}

#[tokio::test]
async fn test_create_then_list_round_trip() {
    common::init_test_logging();
    let service = PantryService::new(Database::in_memory());

    let created = service.create("u1", new_item("Apple", 4.0)).await.unwrap();
    let listed = service.list("u1").await.unwrap();

    assert_eq!(listed, vec![created]);
    assert!(service.list("u2").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_is_not_idempotent() {
    let service = PantryService::new(Database::in_memory());
    let item = service.create("u1", new_item("Pear", 1.0)).await.unwrap();

    service.delete("u1", &item.id).await.unwrap();
    let err = service.delete("u1", &item.id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_foreign_and_missing_items_fail_identically() {
    let service = PantryService::new(Database::in_memory());
    let item = service.create("owner", new_item("Kale", 1.0)).await.unwrap();

    let foreign = service
        .update("intruder", &item.id, FoodItemUpdate::default())
        .await
        .unwrap_err();
    let missing = service
        .update("intruder", "no-such-id", FoodItemUpdate::default())
        .await
        .unwrap_err();

    assert_eq!(foreign.code, missing.code);
    assert_eq!(foreign.message, missing.message);
    assert_eq!(service.list("owner").await.unwrap(), vec![item]);
}

#[tokio::test]
async fn test_concurrent_updates_last_write_wins() {
    let service = PantryService::new(Database::in_memory());
    let item = service.create("u1", new_item("Lemon", 1.0)).await.unwrap();

    let updates = [5.0, 9.0].map(|quantity| {
        let service = service.clone();
        let item_id = item.id.clone();
        tokio::spawn(async move {
            service
                .update(
                    "u1",
                    &item_id,
                    FoodItemUpdate {
                        quantity: Some(quantity),
                        ..FoodItemUpdate::default()
                    },
                )
                .await
        })
    });

    for handle in updates {
        handle.await.unwrap().unwrap();
    }

    let stored = service.list("u1").await.unwrap();
    assert_eq!(stored.len(), 1);
    assert!(
        stored[0].quantity == 5.0 || stored[0].quantity == 9.0,
        "unexpected merged quantity {}",
        stored[0].quantity
    );
}

#[tokio::test]
async fn test_json_file_persists_across_reopen() {
    let dir = TempDir::new().unwrap();

    let database = file_database(&dir);
    database.initialize().await.unwrap();
    assert!(dir.path().join("db.json").exists());

    let item = PantryService::new(database)
        .create("u1", new_item("Carrot", 3.0))
        .await
        .unwrap();

    let reopened = PantryService::new(file_database(&dir));
    let listed = reopened.list("u1").await.unwrap();
    assert_eq!(listed, vec![item]);
    assert!(!dir.path().join("db.json.tmp").exists());
}

#[tokio::test]
async fn test_legacy_document_fields_are_accepted() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("db.json"),
        r#"{
          "users": [
            {"id": "1700000000000", "email": "old@example.com", "password": "$2b$10$abcdefghijklmnopqrstuv"}
          ],
          "pantryItems": [
            {"id": "1700000000001", "userId": "1700000000000", "name": "Beans", "quantity": 2,
             "unit": "cans", "category": "Pantry", "expirationDate": "2025-04-01T00:00:00.000Z",
             "createdAt": "2024-11-14T22:13:20.000Z"}
          ]
        }"#,
    )
    .unwrap();

    let database = file_database(&dir);
    let user: User = database
        .get_user_by_email("old@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.password_hash, "$2b$10$abcdefghijklmnopqrstuv");

    let items = PantryService::new(database).list(&user.id).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].owner_id, "1700000000000");
    assert_eq!(
        items[0].expiration_date,
        chrono::NaiveDate::from_ymd_opt(2025, 4, 1)
    );
}

#[tokio::test]
async fn test_corrupt_document_is_a_storage_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("db.json"), "{ not json").unwrap();

    let err = PantryService::new(file_database(&dir))
        .list("u1")
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
}
