// ABOUTME: JSON document store holding users and pantry items behind a single-writer lock
// ABOUTME: Defines the DocumentStore backend trait and the Database handle used by services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Document Store
//!
//! The whole application state is one JSON document with a `users` and a
//! `pantryItems` array. A [`DocumentStore`] backend loads and saves that
//! document; [`Database`] serializes access to it. Every mutation is a
//! read-modify-write that is flushed to the backend before the lock is
//! released, so two requests never interleave inside one write.

/// JSON file backend
pub mod json_file;
/// In-memory backend
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::errors::{AppError, AppResult};
use crate::models::{FoodItem, User};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Persisted application state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryDocument {
    /// Registered users
    #[serde(default)]
    pub users: Vec<User>,
    /// Items of every user, in insertion order
    #[serde(default)]
    pub pantry_items: Vec<FoodItem>,
}

impl PantryDocument {
    /// Find a user by (normalized) email
    #[must_use]
    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.email == email)
    }

    /// Find a user by id
    #[must_use]
    pub fn user_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Items owned by `owner_id`, in insertion order
    #[must_use]
    pub fn items_for(&self, owner_id: &str) -> Vec<FoodItem> {
        self.pantry_items
            .iter()
            .filter(|item| item.owner_id == owner_id)
            .cloned()
            .collect()
    }

    /// Mutable handle on an item, only if `owner_id` owns it
    pub fn owned_item_mut(&mut self, owner_id: &str, item_id: &str) -> Option<&mut FoodItem> {
        self.pantry_items
            .iter_mut()
            .find(|item| item.id == item_id && item.owner_id == owner_id)
    }
}

/// Backend that persists the whole document
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;

    /// Load the document; a missing or empty source yields an empty document
    async fn load(&self) -> AppResult<PantryDocument>;

    /// Replace the stored document
    async fn save(&self, document: &PantryDocument) -> AppResult<()>;
}

/// Shared handle on the document store
#[derive(Clone)]
pub struct Database {
    backend: Arc<dyn DocumentStore>,
    lock: Arc<Mutex<()>>,
}

impl Database {
    /// Wrap a backend
    #[must_use]
    pub fn new(backend: Arc<dyn DocumentStore>) -> Self {
        Self {
            backend,
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Database over a fresh in-memory backend
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Load the document once and write it back, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or written
    pub async fn initialize(&self) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        let document = self.backend.load().await?;
        self.backend.save(&document).await?;
        debug!(
            backend = self.backend.backend_name(),
            users = document.users.len(),
            items = document.pantry_items.len(),
            "Document store initialized"
        );
        Ok(())
    }

    /// Consistent copy of the current document
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    pub async fn snapshot(&self) -> AppResult<PantryDocument> {
        let _guard = self.lock.lock().await;
        self.backend.load().await
    }

    /// Read-modify-write under the lock
    ///
    /// The document is only saved when `change` succeeds.
    ///
    /// # Errors
    ///
    /// Returns the error of `change`, or a storage error from the backend
    pub async fn mutate<T, F>(&self, change: F) -> AppResult<T>
    where
        F: FnOnce(&mut PantryDocument) -> AppResult<T> + Send,
        T: Send,
    {
        let _guard = self.lock.lock().await;
        let mut document = self.backend.load().await?;
        let value = change(&mut document)?;
        self.backend.save(&document).await?;
        Ok(value)
    }

    /// Look up a user by id
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    pub async fn get_user(&self, id: &str) -> AppResult<Option<User>> {
        Ok(self.snapshot().await?.user_by_id(id).cloned())
    }

    /// Look up a user by normalized email
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    pub async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.snapshot().await?.user_by_email(email).cloned())
    }

    /// Insert a user, rejecting a taken email
    ///
    /// The uniqueness check and the insert happen under the same lock.
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if the email is registered
    pub async fn create_user(&self, user: User) -> AppResult<User> {
        self.mutate(move |document| {
            if document.user_by_email(&user.email).is_some() {
                return Err(AppError::already_exists(
                    crate::constants::error_messages::USER_ALREADY_EXISTS,
                ));
            }
            document.users.push(user.clone());
            Ok(user)
        })
        .await
    }

    /// Items owned by `owner_id`, in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    pub async fn items_for(&self, owner_id: &str) -> AppResult<Vec<FoodItem>> {
        Ok(self.snapshot().await?.items_for(owner_id))
    }

    /// Backend name for logs and readiness checks
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.backend.backend_name()
    }
}
