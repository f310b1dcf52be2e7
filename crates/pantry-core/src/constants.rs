// ABOUTME: User-facing error messages and fixed values shared across layers
// ABOUTME: Keeps the wording of API responses in one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Error messages returned to API clients
pub mod error_messages {
    /// Registration input failed validation
    pub const INVALID_REGISTRATION: &str =
        "Please provide email and a password of at least 6 characters";
    /// Email does not look like `local@domain`
    pub const INVALID_EMAIL_FORMAT: &str = "Please provide a valid email address";
    /// Email already registered
    pub const USER_ALREADY_EXISTS: &str = "User already exists";
    /// Login failed (unknown email or wrong password)
    pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
    /// No session token on a protected request
    pub const NO_TOKEN: &str = "Not authorized, no token";
    /// Session token did not verify
    pub const TOKEN_FAILED: &str = "Not authorized, token failed";
    /// Session token refers to a deleted user
    pub const USER_NOT_FOUND: &str = "Not authorized, user not found";
    /// Pantry item missing or owned by someone else
    pub const ITEM_NOT_FOUND: &str = "Item not found or not authorized";
    /// Recipe generation requested with no items
    pub const EMPTY_PANTRY: &str = "Your pantry is empty.";
    /// Generic message for upstream AI failures
    pub const GENERATION_FAILED: &str = "Failed to generate recipes from AI.";
}

/// Minimum accepted password length at registration
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Days ahead (inclusive) in which an item counts as expiring soon
pub const SOON_THRESHOLD_DAYS: i64 = 3;
