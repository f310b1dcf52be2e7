// ABOUTME: Security utilities for browser-facing responses
// ABOUTME: Session cookie construction and security response headers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Session cookie helpers
pub mod cookies;
/// Security response headers
pub mod headers;
