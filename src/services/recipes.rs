// ABOUTME: Recipe suggestions built from a user's pantry via a pluggable generator
// ABOUTME: Builds the ingredient list, calls the generator under a deadline and parses its JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Request Builder
//!
//! The generator returns free text that should be a JSON array of recipes,
//! possibly wrapped in markdown code fences. Anything that goes wrong after
//! the ingredient list is built surfaces as `GenerationFailed`; nothing is
//! retried.

use crate::config::RecipeConfig;
use crate::constants::env_vars;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::llm::prompts::recipe_suggestions_prompt;
use crate::llm::{ChatMessage, ChatRequest, GeminiProvider, LlmProvider};
use crate::models::{FoodItem, Recipe};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Source of raw recipe text for a list of ingredients
#[async_trait]
pub trait RecipeGenerator: Send + Sync {
    /// Raw generator output for `ingredients`
    async fn generate(&self, ingredients: &[String]) -> AppResult<String>;
}

/// Generator backed by a chat completion model
pub struct LlmRecipeGenerator {
    provider: Arc<dyn LlmProvider>,
}

impl LlmRecipeGenerator {
    /// Generator over `provider`
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl RecipeGenerator for LlmRecipeGenerator {
    async fn generate(&self, ingredients: &[String]) -> AppResult<String> {
        let request = ChatRequest::new(vec![ChatMessage::user(recipe_suggestions_prompt(
            ingredients,
        ))])
        .with_json_output();

        debug!(
            provider = self.provider.name(),
            model = self.provider.default_model(),
            ingredients = ingredients.len(),
            "Requesting recipe suggestions"
        );

        let response = self.provider.complete(&request).await?;
        let usage = response.usage.as_ref();
        debug!(
            model = %response.model,
            finish_reason = response.finish_reason.as_deref().unwrap_or("unknown"),
            prompt_tokens = usage.map_or(0, |u| u.prompt_tokens),
            completion_tokens = usage.map_or(0, |u| u.completion_tokens),
            total_tokens = usage.map_or(0, |u| u.total_tokens),
            "Recipe suggestions received"
        );

        Ok(response.content)
    }
}

/// Stand-in used when no API key is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredRecipeGenerator;

#[async_trait]
impl RecipeGenerator for UnconfiguredRecipeGenerator {
    async fn generate(&self, _ingredients: &[String]) -> AppResult<String> {
        Err(AppError::config(format!(
            "{} is not set",
            env_vars::GEMINI_API_KEY
        )))
    }
}

/// Production generator for `config`
#[must_use]
pub fn recipe_generator_from_config(config: &RecipeConfig) -> Arc<dyn RecipeGenerator> {
    config.gemini_api_key.as_ref().map_or_else(
        || {
            warn!("Recipe generation disabled, no Gemini API key configured");
            Arc::new(UnconfiguredRecipeGenerator) as Arc<dyn RecipeGenerator>
        },
        |api_key| {
            let provider = GeminiProvider::new(api_key.clone()).with_default_model(&config.model);
            Arc::new(LlmRecipeGenerator::new(Arc::new(provider))) as Arc<dyn RecipeGenerator>
        },
    )
}

/// One `"<name> (<quantity> <unit>)"` entry per item
///
/// # Errors
///
/// Returns `EmptyPantry` when `items` is empty
pub fn build_ingredient_list(items: &[FoodItem]) -> AppResult<Vec<String>> {
    if items.is_empty() {
        return Err(AppError::empty_pantry());
    }

    Ok(items
        .iter()
        .map(|item| {
            let unit = item.unit.trim();
            if unit.is_empty() {
                format!("{} ({})", item.name, item.quantity)
            } else {
                format!("{} ({} {unit})", item.name, item.quantity)
            }
        })
        .collect())
}

/// Parse generator output into recipes
///
/// Markdown code fences are removed before parsing.
///
/// # Errors
///
/// Returns `GenerationFailed` if the text is not a JSON array of recipes
pub fn parse_recipes(raw: &str) -> AppResult<Vec<Recipe>> {
    let cleaned = raw.replace("```json", "").replace("```", "");
    serde_json::from_str(cleaned.trim()).map_err(|e| {
        AppError::generation(format!("Generator returned unusable output: {e}")).with_source(e)
    })
}

/// Recipe suggestions for a pantry snapshot
#[derive(Clone)]
pub struct RecipeService {
    generator: Arc<dyn RecipeGenerator>,
    deadline: Duration,
}

impl RecipeService {
    /// Service calling `generator`, giving up after `deadline`
    #[must_use]
    pub fn new(generator: Arc<dyn RecipeGenerator>, deadline: Duration) -> Self {
        Self {
            generator,
            deadline,
        }
    }

    /// Suggest recipes for `items`
    ///
    /// An empty pantry fails before the generator is called.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPantry` for no items and `GenerationFailed` for any
    /// generator failure, timeout or malformed output
    pub async fn suggest(&self, items: &[FoodItem]) -> AppResult<Vec<Recipe>> {
        let ingredients = build_ingredient_list(items)?;

        let raw = match timeout(self.deadline, self.generator.generate(&ingredients)).await {
            Ok(Ok(raw)) => raw,
            Ok(Err(e)) if e.code == ErrorCode::GenerationFailed => return Err(e),
            Ok(Err(e)) => {
                return Err(
                    AppError::generation(format!("Recipe generator failed: {}", e.message))
                        .with_source(e),
                )
            }
            Err(_) => {
                return Err(AppError::generation(format!(
                    "Recipe generator timed out after {}s",
                    self.deadline.as_secs()
                )))
            }
        };

        parse_recipes(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{ChatResponse, TokenUsage};
    use chrono::Utc;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingProvider {
        requests: Mutex<Vec<ChatRequest>>,
    }

    #[async_trait]
    impl LlmProvider for RecordingProvider {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn default_model(&self) -> &str {
            "test-model"
        }

        async fn complete(&self, request: &ChatRequest) -> AppResult<ChatResponse> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(ChatResponse {
                content: "[]".to_owned(),
                model: "test-model".to_owned(),
                usage: Some(TokenUsage {
                    prompt_tokens: 12,
                    completion_tokens: 1,
                    total_tokens: 13,
                }),
                finish_reason: Some("STOP".to_owned()),
            })
        }
    }

    fn item(name: &str, quantity: f64, unit: &str) -> FoodItem {
        FoodItem {
            id: name.to_lowercase(),
            owner_id: "u1".into(),
            name: name.into(),
            quantity,
            unit: unit.into(),
            category: "Pantry".into(),
            expiration_date: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_ingredient_list_formatting() {
        let list = build_ingredient_list(&[
            item("Flour", 2.0, "kg"),
            item("Eggs", 6.0, ""),
            item("Milk", 1.5, " l "),
        ])
        .unwrap();
        assert_eq!(list, vec!["Flour (2 kg)", "Eggs (6)", "Milk (1.5 l)"]);
    }

    #[test]
    fn test_empty_pantry_is_rejected() {
        let err = build_ingredient_list(&[]).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyPantry);
    }

    #[test]
    fn test_parse_recipes_strips_code_fences() {
        let raw = "```json\n[{\"recipeName\": \"Pancakes\", \"description\": \"Fluffy\", \"ingredients\": [\"Flour\"], \"instructions\": [\"Mix\", \"Fry\"]}]\n```";
        let recipes = parse_recipes(raw).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].recipe_name, "Pancakes");
        assert_eq!(recipes[0].instructions, vec!["Mix", "Fry"]);
    }

    #[test]
    fn test_parse_recipes_rejects_prose() {
        let err = parse_recipes("Sure! Here are some recipes you could try.").unwrap_err();
        assert_eq!(err.code, ErrorCode::GenerationFailed);

        let err = parse_recipes(r#"{"recipeName": "Not an array"}"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::GenerationFailed);
    }

    #[tokio::test]
    async fn test_unconfigured_generator_surfaces_as_generation_failure() {
        let service = RecipeService::new(
            Arc::new(UnconfiguredRecipeGenerator),
            Duration::from_secs(1),
        );
        let err = service.suggest(&[item("Rice", 1.0, "kg")]).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::GenerationFailed);
        assert!(err.message.contains("GEMINI_API_KEY"));
    }

    #[tokio::test]
    async fn test_llm_generator_sends_json_prompt_with_ingredients() {
        let provider = Arc::new(RecordingProvider::default());
        let generator = LlmRecipeGenerator::new(provider.clone());

        let raw = generator
            .generate(&["Rice (1 kg)".to_owned(), "Eggs (6)".to_owned()])
            .await
            .unwrap();
        assert_eq!(raw, "[]");

        let requests = provider.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].json_output);
        assert!(requests[0].messages[0]
            .content
            .starts_with("Based on these ingredients: Rice (1 kg), Eggs (6),"));
    }
}
