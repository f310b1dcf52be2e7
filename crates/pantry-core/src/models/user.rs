// ABOUTME: User account model and its public projection
// ABOUTME: Password hashes never leave the server; API responses use UserInfo
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registered user as persisted in the document store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier
    pub id: String,
    /// Login email, unique, stored trimmed and lower-cased
    pub email: String,
    /// bcrypt hash; documents written by older versions use `password`
    #[serde(alias = "password")]
    pub password_hash: String,
    /// Registration time, absent on accounts created by older versions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Create a new user with a fresh identifier
    #[must_use]
    pub fn new(email: String, password_hash: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            email,
            password_hash,
            created_at: Some(Utc::now()),
        }
    }
}

/// User information safe to return to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// User identifier
    pub id: String,
    /// Login email
    pub email: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
        }
    }
}
