// ABOUTME: Integration tests for the recipe service and its generator contract
// ABOUTME: Uses a scripted generator to check call counts, deadlines and output handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Utc;
use common::{ScriptedGenerator, SAMPLE_RECIPES};
use pantry_tracker::errors::{AppError, ErrorCode};
use pantry_tracker::models::FoodItem;
use pantry_tracker::services::RecipeService;
use std::time::Duration;

fn pantry() -> Vec<FoodItem> {
    vec![FoodItem {
        id: "1".to_owned(),
        owner_id: "u1".to_owned(),
        name: "Chickpeas".to_owned(),
        quantity: 400.0,
        unit: "g".to_owned(),
        category: "Pantry".to_owned(),
        expiration_date: None,
        created_at: Utc::now(),
    }]
}

#[tokio::test]
async fn test_empty_pantry_never_reaches_generator() {
    let generator = ScriptedGenerator::replying(SAMPLE_RECIPES);
    let service = RecipeService::new(generator.clone(), Duration::from_secs(5));

    let err = service.suggest(&[]).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::EmptyPantry);
    assert_eq!(err.message, "Your pantry is empty.");
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn test_generator_output_is_parsed() {
    let generator = ScriptedGenerator::replying(SAMPLE_RECIPES);
    let service = RecipeService::new(generator.clone(), Duration::from_secs(5));

    let recipes = service.suggest(&pantry()).await.unwrap();

    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[1].recipe_name, "Fried Rice");
    assert_eq!(generator.calls(), 1);
    assert_eq!(generator.last_ingredients(), vec!["Chickpeas (400 g)"]);
}

#[tokio::test]
async fn test_malformed_output_is_generation_failure() {
    let service = RecipeService::new(
        ScriptedGenerator::replying("Here are some ideas: hummus, falafel."),
        Duration::from_secs(5),
    );

    let err = service.suggest(&pantry()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::GenerationFailed);
}

#[tokio::test]
async fn test_upstream_error_is_wrapped_once() {
    let generator =
        ScriptedGenerator::failing(AppError::external_service("Gemini", "503 overloaded"));
    let service = RecipeService::new(generator.clone(), Duration::from_secs(5));

    let err = service.suggest(&pantry()).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::GenerationFailed);
    assert!(err.message.contains("503 overloaded"));
    assert_eq!(generator.calls(), 1);
}

#[tokio::test]
async fn test_slow_generator_hits_deadline() {
    let generator = ScriptedGenerator::slow(SAMPLE_RECIPES, Duration::from_secs(10));
    let service = RecipeService::new(generator.clone(), Duration::from_millis(50));

    let err = service.suggest(&pantry()).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::GenerationFailed);
    assert!(err.message.contains("timed out"));
    assert_eq!(generator.calls(), 1);
}
