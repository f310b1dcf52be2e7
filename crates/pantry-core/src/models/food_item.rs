// ABOUTME: Pantry food item model plus the create and partial-update input types
// ABOUTME: Includes expiration date parsing shared by request validation and persisted data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A food item stored in a user's pantry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    /// Unique identifier, immutable after creation
    pub id: String,
    /// Creating user; items written by older versions use `userId`
    #[serde(alias = "userId")]
    pub owner_id: String,
    /// Display name
    pub name: String,
    /// Amount on hand
    pub quantity: f64,
    /// Free-text unit, may be empty
    #[serde(default)]
    pub unit: String,
    /// Category name as entered (see [`Category`] for the known set)
    pub category: String,
    /// Calendar day the item expires; `None` never expires
    #[serde(default, deserialize_with = "deserialize_stored_date")]
    pub expiration_date: Option<NaiveDate>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl FoodItem {
    /// Category this item falls under for filtering
    #[must_use]
    pub fn category_kind(&self) -> Category {
        Category::parse(&self.category)
    }
}

/// Categories offered by the pantry UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Fruit and vegetables
    Produce,
    /// Milk, cheese, yoghurt
    Dairy,
    /// Meat and fish
    Meat,
    /// Dry goods
    Pantry,
    /// Freezer items
    Frozen,
    /// Bread and pastries
    Bakery,
    /// Anything else
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Self; 7] = [
        Self::Produce,
        Self::Dairy,
        Self::Meat,
        Self::Pantry,
        Self::Frozen,
        Self::Bakery,
        Self::Other,
    ];

    /// Display name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Produce => "Produce",
            Self::Dairy => "Dairy",
            Self::Meat => "Meat",
            Self::Pantry => "Pantry",
            Self::Frozen => "Frozen",
            Self::Bakery => "Bakery",
            Self::Other => "Other",
        }
    }

    /// Parse a category name case-insensitively, unknown names map to `Other`
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(value))
            .unwrap_or(Self::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields submitted when creating an item
///
/// Everything is optional at the type level so that missing fields are
/// reported as validation errors rather than body rejections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFoodItem {
    /// Display name (required, non-blank)
    pub name: Option<String>,
    /// Amount (required, > 0)
    pub quantity: Option<f64>,
    /// Unit, defaults to empty
    pub unit: Option<String>,
    /// Category (required, non-blank)
    pub category: Option<String>,
    /// `YYYY-MM-DD` or RFC 3339; empty or `null` means no expiration
    pub expiration_date: Option<String>,
}

/// Allow-listed fields of a partial update
///
/// `id`, `ownerId` and `createdAt` are not part of this type, so they are
/// dropped during deserialization even when a client sends them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItemUpdate {
    /// New name
    pub name: Option<String>,
    /// New quantity
    pub quantity: Option<f64>,
    /// New unit
    pub unit: Option<String>,
    /// New category
    pub category: Option<String>,
    /// Omitted keeps the date, `null` clears it, a string replaces it
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiration_date: Option<Option<String>>,
}

/// Parse an expiration date as submitted by a client
///
/// Accepts `YYYY-MM-DD` and RFC 3339 timestamps (truncated to their UTC
/// date). A blank string means "never expires".
///
/// # Errors
///
/// Returns an `InvalidInput` error for any other value.
pub fn parse_expiration_date(raw: &str) -> AppResult<Option<NaiveDate>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(Some(date));
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| Some(dt.with_timezone(&Utc).date_naive()))
        .map_err(|_| {
            AppError::invalid_input(format!(
                "Invalid expiration date '{raw}', expected YYYY-MM-DD"
            ))
        })
}

/// Distinguish an explicit `null` from an omitted field
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Stored dates may be `null`, empty, a day or a full timestamp
fn deserialize_stored_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => parse_expiration_date(&raw).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_expiration_date_formats() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(parse_expiration_date("2025-03-14").unwrap(), Some(day));
        assert_eq!(
            parse_expiration_date("2025-03-14T00:00:00.000Z").unwrap(),
            Some(day)
        );
        assert_eq!(parse_expiration_date("  ").unwrap(), None);
        assert!(parse_expiration_date("14/03/2025").is_err());
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("dairy"), Category::Dairy);
        assert_eq!(Category::parse(" Frozen "), Category::Frozen);
        assert_eq!(Category::parse("Spices"), Category::Other);
    }

    #[test]
    fn test_update_distinguishes_null_from_missing() {
        let cleared: FoodItemUpdate =
            serde_json::from_str(r#"{"expirationDate": null}"#).unwrap();
        assert_eq!(cleared.expiration_date, Some(None));

        let untouched: FoodItemUpdate = serde_json::from_str(r#"{"name": "Milk"}"#).unwrap();
        assert_eq!(untouched.expiration_date, None);
    }

    #[test]
    fn test_update_ignores_immutable_fields() {
        let update: FoodItemUpdate = serde_json::from_str(
            r#"{"id": "other", "ownerId": "mallory", "createdAt": "2020-01-01T00:00:00Z", "quantity": 2}"#,
        )
        .unwrap();
        assert_eq!(update.quantity, Some(2.0));
        assert!(update.name.is_none());
    }

    #[test]
    fn test_legacy_item_fields() {
        let item: FoodItem = serde_json::from_str(
            r#"{
                "id": "a1",
                "userId": "u1",
                "name": "Milk",
                "quantity": 1,
                "category": "Dairy",
                "expirationDate": "",
                "createdAt": "2024-05-01T10:00:00.000Z"
            }"#,
        )
        .unwrap();
        assert_eq!(item.owner_id, "u1");
        assert_eq!(item.unit, "");
        assert_eq!(item.expiration_date, None);
    }
}
