// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Allows credentialed requests from the configured frontend origins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

/// Configure CORS settings for the pantry API
///
/// The session travels in a cookie, so cross-origin requests must be
/// credentialed and the origin list must be explicit. Without configured
/// origins (`CORS_ALLOWED_ORIGINS`) only same-origin requests work.
///
/// # Examples
///
/// ```bash
/// export CORS_ALLOWED_ORIGINS="https://pantry.example.com,http://localhost:5173"
/// ```
#[must_use]
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            if origin == "*" {
                warn!("Wildcard CORS origin ignored, credentialed requests need explicit origins");
                return None;
            }
            HeaderValue::from_str(origin)
                .map_err(|e| warn!(origin = %origin, error = %e, "Invalid CORS origin ignored"))
                .ok()
        })
        .collect();

    let layer = CorsLayer::new()
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("authorization"),
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("x-request-id"),
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .expose_headers([HeaderName::from_static("x-request-id")]);

    if origins.is_empty() {
        layer
    } else {
        layer
            .allow_origin(AllowOrigin::list(origins))
            .allow_credentials(true)
    }
}
