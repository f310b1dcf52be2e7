// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Re-exports the environment-driven server configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the pantry server
//!
//! All settings come from environment variables (see
//! [`crate::constants::env_vars`]); the binary can override the port and
//! the document path on the command line.

/// Environment and server configuration
pub mod environment;

pub use environment::{
    AuthConfig, CorsConfig, DatabaseConfig, Environment, RecipeConfig, ServerConfig,
};
