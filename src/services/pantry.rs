// ABOUTME: Pantry item lifecycle with per-user ownership enforcement
// ABOUTME: Validates new items, applies partial updates and serves filtered listings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pantry Service
//!
//! Every operation takes the caller's user id. An item that does not exist
//! and an item owned by someone else produce the same `ResourceNotFound`
//! error, so callers cannot probe for other users' items.

use crate::errors::{AppError, AppResult};
use crate::expiration::classify;
use crate::models::{
    parse_expiration_date, Category, ExpirationStatus, FoodItem, FoodItemUpdate, NewFoodItem,
};
use crate::store::Database;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Optional listing filters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PantryFilter {
    /// Case-insensitive substring of the item name
    pub q: Option<String>,
    /// Category name; `All` or empty disables the filter
    pub category: Option<String>,
}

impl PantryFilter {
    /// Whether `item` passes the filter
    #[must_use]
    pub fn matches(&self, item: &FoodItem) -> bool {
        let name_matches = self
            .q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .is_none_or(|q| item.name.to_lowercase().contains(&q.to_lowercase()));

        let category_matches = self
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"))
            .is_none_or(|c| item.category_kind() == Category::parse(c));

        name_matches && category_matches
    }
}

/// Item as returned by the listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryItemView {
    /// Stored item
    #[serde(flatten)]
    pub item: FoodItem,
    /// Freshness computed for today
    pub expiration_status: ExpirationStatus,
}

impl PantryItemView {
    /// Attach the status for `today`
    #[must_use]
    pub fn new(item: FoodItem, today: NaiveDate) -> Self {
        let expiration_status = classify(item.expiration_date, today);
        Self {
            item,
            expiration_status,
        }
    }
}

/// Pantry CRUD against the document store
#[derive(Clone)]
pub struct PantryService {
    database: Database,
}

impl PantryService {
    /// Service over `database`
    #[must_use]
    pub const fn new(database: Database) -> Self {
        Self { database }
    }

    /// Validate and store a new item for `owner_id`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the name or category is blank, the quantity
    /// is missing or not positive, or the expiration date is malformed
    pub async fn create(&self, owner_id: &str, input: NewFoodItem) -> AppResult<FoodItem> {
        let item = Self::build_item(owner_id, input)?;
        self.database
            .mutate(|document| {
                document.pantry_items.push(item.clone());
                Ok(item)
            })
            .await
    }

    fn build_item(owner_id: &str, input: NewFoodItem) -> AppResult<FoodItem> {
        let name = input
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| AppError::invalid_input("Name is required"))?;

        let quantity = input
            .quantity
            .filter(|quantity| quantity.is_finite() && *quantity > 0.0)
            .ok_or_else(|| AppError::invalid_input("Quantity must be a number greater than zero"))?;

        let category = input
            .category
            .as_deref()
            .map(str::trim)
            .filter(|category| !category.is_empty())
            .ok_or_else(|| AppError::invalid_input("Category is required"))?;

        let expiration_date = match input.expiration_date.as_deref() {
            Some(raw) => parse_expiration_date(raw)?,
            None => None,
        };

        Ok(FoodItem {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.to_owned(),
            name: name.to_owned(),
            quantity,
            unit: input.unit.unwrap_or_default().trim().to_owned(),
            category: category.to_owned(),
            expiration_date,
            created_at: Utc::now(),
        })
    }

    /// Apply a partial update to an item owned by `owner_id`
    ///
    /// Only the fields present in `update` change. Name and quantity are
    /// taken as given.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the item is missing or foreign, and
    /// `InvalidInput` for a malformed expiration date
    pub async fn update(
        &self,
        owner_id: &str,
        item_id: &str,
        update: FoodItemUpdate,
    ) -> AppResult<FoodItem> {
        self.database
            .mutate(|document| {
                let item = document
                    .owned_item_mut(owner_id, item_id)
                    .ok_or_else(AppError::item_not_found)?;

                let expiration_date = match update.expiration_date {
                    None => item.expiration_date,
                    Some(None) => None,
                    Some(Some(raw)) => parse_expiration_date(&raw)?,
                };

                if let Some(name) = update.name {
                    item.name = name;
                }
                if let Some(quantity) = update.quantity {
                    item.quantity = quantity;
                }
                if let Some(unit) = update.unit {
                    item.unit = unit;
                }
                if let Some(category) = update.category {
                    item.category = category;
                }
                item.expiration_date = expiration_date;

                Ok(item.clone())
            })
            .await
    }

    /// Permanently delete an item owned by `owner_id`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the item is missing or foreign,
    /// including when it was already deleted
    pub async fn delete(&self, owner_id: &str, item_id: &str) -> AppResult<()> {
        self.database
            .mutate(|document| {
                let position = document
                    .pantry_items
                    .iter()
                    .position(|item| item.id == item_id && item.owner_id == owner_id)
                    .ok_or_else(AppError::item_not_found)?;
                document.pantry_items.remove(position);
                Ok(())
            })
            .await
    }

    /// All items of `owner_id` in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn list(&self, owner_id: &str) -> AppResult<Vec<FoodItem>> {
        self.database.items_for(owner_id).await
    }

    /// Items of `owner_id` passing `filter`, in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn list_filtered(
        &self,
        owner_id: &str,
        filter: &PantryFilter,
    ) -> AppResult<Vec<FoodItem>> {
        let mut items = self.list(owner_id).await?;
        items.retain(|item| filter.matches(item));
        Ok(items)
    }
}
