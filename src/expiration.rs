// ABOUTME: Expiration classifier mapping an item's expiration date to Safe, Soon or Expired
// ABOUTME: Provides the Clock abstraction that supplies "today" as a UTC calendar date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Expiration Classifier
//!
//! Classification works on calendar days in UTC. An item expiring today is
//! `Soon`, an item that expired yesterday is `Expired`, and anything more
//! than [`SOON_THRESHOLD_DAYS`] ahead (or without a date) is `Safe`.

use crate::constants::SOON_THRESHOLD_DAYS;
use crate::models::ExpirationStatus;
use chrono::{NaiveDate, Utc};

/// Source of the current date
pub trait Clock: Send + Sync {
    /// Today's calendar date in UTC
    fn today(&self) -> NaiveDate;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock pinned to one day
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Whole days from `today` until `expiration_date`, negative once past
#[must_use]
pub fn days_until(expiration_date: NaiveDate, today: NaiveDate) -> i64 {
    (expiration_date - today).num_days()
}

/// Classify an expiration date relative to `today`
#[must_use]
pub fn classify(expiration_date: Option<NaiveDate>, today: NaiveDate) -> ExpirationStatus {
    let Some(date) = expiration_date else {
        return ExpirationStatus::Safe;
    };

    match days_until(date, today) {
        diff if diff < 0 => ExpirationStatus::Expired,
        diff if diff <= SOON_THRESHOLD_DAYS => ExpirationStatus::Soon,
        _ => ExpirationStatus::Safe,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    #[test]
    fn test_past_dates_are_expired() {
        let yesterday = today().checked_sub_days(Days::new(1));
        assert_eq!(classify(yesterday, today()), ExpirationStatus::Expired);

        let last_year = NaiveDate::from_ymd_opt(2024, 6, 10);
        assert_eq!(classify(last_year, today()), ExpirationStatus::Expired);
    }

    #[test]
    fn test_zero_to_three_days_is_soon() {
        for offset in 0..=3 {
            let date = today().checked_add_days(Days::new(offset));
            assert_eq!(
                classify(date, today()),
                ExpirationStatus::Soon,
                "offset {offset}"
            );
        }
    }

    #[test]
    fn test_more_than_three_days_is_safe() {
        let date = today().checked_add_days(Days::new(4));
        assert_eq!(classify(date, today()), ExpirationStatus::Safe);
    }

    #[test]
    fn test_missing_date_is_safe() {
        assert_eq!(classify(None, today()), ExpirationStatus::Safe);
    }

    #[test]
    fn test_days_until_crosses_month_boundary() {
        let first = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let last = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        assert_eq!(days_until(first, last), 1);
        assert_eq!(days_until(last, first), -1);
    }

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock(today()).today(), today());
    }
}
