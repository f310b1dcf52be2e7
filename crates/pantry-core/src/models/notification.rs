// ABOUTME: Expiration status and notification records derived from pantry items
// ABOUTME: Neither type is persisted; both are recomputed on every request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Freshness of an item relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpirationStatus {
    /// More than the soon threshold away, or no expiration date
    Safe,
    /// Expires within the soon threshold (today included)
    Soon,
    /// Expiration date is in the past
    Expired,
}

/// Status carried by a notification (safe items never notify)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationStatus {
    /// Expiring soon
    Soon,
    /// Already expired
    Expired,
}

impl NotificationStatus {
    /// Notification status for an expiration status, `None` for safe items
    #[must_use]
    pub const fn from_expiration(status: ExpirationStatus) -> Option<Self> {
        match status {
            ExpirationStatus::Safe => None,
            ExpirationStatus::Soon => Some(Self::Soon),
            ExpirationStatus::Expired => Some(Self::Expired),
        }
    }
}

/// Alert about one pantry item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Identifier of the item the alert is about
    pub id: String,
    /// Headline
    pub title: String,
    /// Detail line
    pub message: String,
    /// Severity
    pub status: NotificationStatus,
}
