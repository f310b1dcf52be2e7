// ABOUTME: Core types and constants for the Pantry Tracker server
// ABOUTME: Foundation crate with error handling, domain models, and user-facing messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pantry Core
//!
//! Foundation crate providing shared types for the pantry tracker. This crate
//! changes infrequently and carries no I/O, so the server crate and its tests
//! can depend on it without pulling in the HTTP stack.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Food items, users, notifications and recipes
//! - **constants**: User-facing error messages shared by several layers

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// User-facing messages and fixed values
pub mod constants;

/// Core data models (`FoodItem`, `User`, `Notification`, `Recipe`)
pub mod models;
