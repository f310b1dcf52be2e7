// ABOUTME: Prompt templates for LLM interactions loaded at compile time
// ABOUTME: Provides the recipe suggestion prompt built from pantry ingredients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Prompts
//!
//! Prompts live in markdown files next to this module so they can be edited
//! without touching code.

/// Recipe suggestion template; `{ingredients}` is replaced by the ingredient list
pub const RECIPE_SUGGESTIONS_TEMPLATE: &str = include_str!("recipe_suggestions.md");

const INGREDIENTS_PLACEHOLDER: &str = "{ingredients}";

/// Render the recipe suggestion prompt for `ingredients`
#[must_use]
pub fn recipe_suggestions_prompt(ingredients: &[String]) -> String {
    RECIPE_SUGGESTIONS_TEMPLATE
        .trim()
        .replace(INGREDIENTS_PLACEHOLDER, &ingredients.join(", "))
}
