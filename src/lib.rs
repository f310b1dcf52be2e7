// ABOUTME: Main library entry point for the pantry tracker API
// ABOUTME: Food inventory with expiration tracking, alerts and AI recipe suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pantry Tracker
//!
//! A personal pantry-tracking web service. Users register, keep a list of
//! food items with expiration dates, receive notifications for items that
//! are expiring or expired, and ask an AI model for recipes built from what
//! they have.
//!
//! ## Architecture
//!
//! - **Store**: one JSON document of users and pantry items behind a
//!   single-writer lock
//! - **Expiration**: pure classifier from an expiration date to Safe, Soon
//!   or Expired
//! - **Notifications**: alerts derived from a user's items on demand
//! - **Services**: accounts, pantry CRUD with ownership checks, recipes
//! - **Routes**: axum routers per domain, assembled in [`server`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pantry_tracker::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Pantry server configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Session tokens and password hashing
pub mod auth;

/// Environment configuration
pub mod config;

/// Application constants and defaults
pub mod constants;

/// Unified error handling
pub mod errors;

/// Expiration classification and the clock abstraction
pub mod expiration;

/// LLM provider abstraction and the Gemini client
pub mod llm;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Domain models
pub mod models;

/// Expiration notifications
pub mod notifications;

/// Shared server state
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Session cookies and response security headers
pub mod security;

/// HTTP server assembly
pub mod server;

/// Business logic services
pub mod services;

/// JSON document persistence
pub mod store;
