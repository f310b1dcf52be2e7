// ABOUTME: Core data models for the pantry tracker
// ABOUTME: Re-exports food item, user, notification and recipe types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Pantry food items and their input types
pub mod food_item;
/// Expiration status and notifications
pub mod notification;
/// AI recipe suggestions
pub mod recipe;
/// User accounts
pub mod user;

pub use food_item::{parse_expiration_date, Category, FoodItem, FoodItemUpdate, NewFoodItem};
pub use notification::{ExpirationStatus, Notification, NotificationStatus};
pub use recipe::Recipe;
pub use user::{User, UserInfo};
