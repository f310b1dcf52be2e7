// ABOUTME: Derives expiration alerts from one user's pantry items
// ABOUTME: Notifications are recomputed per request and never stored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::expiration::{classify, days_until};
use crate::models::{FoodItem, Notification, NotificationStatus};
use chrono::{Datelike, NaiveDate};

/// One notification per item that is expired or expiring soon
///
/// Items without an expiration date are skipped. Output follows input order.
#[must_use]
pub fn derive_notifications(items: &[FoodItem], today: NaiveDate) -> Vec<Notification> {
    items
        .iter()
        .filter_map(|item| {
            let date = item.expiration_date?;
            let status = NotificationStatus::from_expiration(classify(Some(date), today))?;
            Some(build_notification(item, date, status, today))
        })
        .collect()
}

fn build_notification(
    item: &FoodItem,
    date: NaiveDate,
    status: NotificationStatus,
    today: NaiveDate,
) -> Notification {
    let (title, message) = match status {
        NotificationStatus::Expired => (
            format!("{} has expired!", item.name),
            format!("Expired on {}", short_us_date(date)),
        ),
        // Day count is one more than the raw difference: expiring today reads "1 day(s)"
        NotificationStatus::Soon => (
            format!("{} is expiring soon!", item.name),
            format!("Expires in {} day(s)", days_until(date, today) + 1),
        ),
    };

    Notification {
        id: item.id.clone(),
        title,
        message,
        status,
    }
}

/// `M/D/YYYY` without zero padding
fn short_us_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}
