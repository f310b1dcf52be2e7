// ABOUTME: Recipe record returned by the AI recipe generator
// ABOUTME: Field names follow the JSON shape the generator is asked to produce
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A suggested recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Name of the dish
    pub recipe_name: String,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// Ingredients, taken from the pantry where possible
    pub ingredients: Vec<String>,
    /// Preparation steps in order
    pub instructions: Vec<String>,
}
