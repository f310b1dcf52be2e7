// ABOUTME: In-memory DocumentStore backend
// ABOUTME: Used by tests and by deployments that do not need persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{DocumentStore, PantryDocument};
use crate::errors::AppResult;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Document kept in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: RwLock<PantryDocument>,
}

impl MemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with `document`
    #[must_use]
    pub fn with_document(document: PantryDocument) -> Self {
        Self {
            document: RwLock::new(document),
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn load(&self) -> AppResult<PantryDocument> {
        Ok(self.document.read().await.clone())
    }

    async fn save(&self, document: &PantryDocument) -> AppResult<()> {
        document.clone_into(&mut *self.document.write().await);
        Ok(())
    }
}
