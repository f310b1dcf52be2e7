// ABOUTME: Security response headers applied to every HTTP response
// ABOUTME: Development and production presets for CSP, framing, sniffing and HSTS
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::Environment;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

const PERMISSIONS_POLICY: &str =
    "geolocation=(), microphone=(), camera=(), payment=(), usb=()";

/// Security headers configuration
#[derive(Debug, Clone)]
pub struct SecurityHeadersConfig {
    /// Content-Security-Policy header value
    pub csp: String,
    /// X-Frame-Options header value
    pub frame_options: String,
    /// X-Content-Type-Options header value
    pub content_type_options: String,
    /// Referrer-Policy header value
    pub referrer_policy: String,
    /// Permissions-Policy header value
    pub permissions_policy: String,
    /// Strict-Transport-Security header value (HTTPS deployments only)
    pub hsts: Option<String>,
}

impl SecurityHeadersConfig {
    /// Preset for an environment
    #[must_use]
    pub fn for_environment(environment: Environment) -> Self {
        if environment.is_production() {
            Self::production()
        } else {
            Self::development()
        }
    }

    /// Relaxed CSP so the Vite dev server can talk to the API
    #[must_use]
    pub fn development() -> Self {
        Self {
            csp: "default-src 'self'; script-src 'self' 'unsafe-inline'; style-src 'self' 'unsafe-inline'; img-src 'self' data: https:; connect-src 'self' ws: http://localhost:* https://localhost:*; frame-ancestors 'none'; object-src 'none'; base-uri 'self';".to_owned(),
            frame_options: "DENY".to_owned(),
            content_type_options: "nosniff".to_owned(),
            referrer_policy: "strict-origin-when-cross-origin".to_owned(),
            permissions_policy: PERMISSIONS_POLICY.to_owned(),
            hsts: None,
        }
    }

    /// Strict preset for deployed servers
    #[must_use]
    pub fn production() -> Self {
        Self {
            csp: "default-src 'self'; script-src 'self'; style-src 'self' 'unsafe-inline'; img-src 'self' data: https:; connect-src 'self'; frame-ancestors 'none'; object-src 'none'; base-uri 'self'; upgrade-insecure-requests;".to_owned(),
            frame_options: "DENY".to_owned(),
            content_type_options: "nosniff".to_owned(),
            referrer_policy: "strict-origin-when-cross-origin".to_owned(),
            permissions_policy: PERMISSIONS_POLICY.to_owned(),
            hsts: Some("max-age=31536000; includeSubDomains".to_owned()),
        }
    }

    /// Header name/value pairs
    #[must_use]
    pub fn to_headers(&self) -> Vec<(&'static str, &str)> {
        let mut headers = vec![
            ("content-security-policy", self.csp.as_str()),
            ("x-frame-options", self.frame_options.as_str()),
            ("x-content-type-options", self.content_type_options.as_str()),
            ("referrer-policy", self.referrer_policy.as_str()),
            ("permissions-policy", self.permissions_policy.as_str()),
        ];
        if let Some(hsts) = &self.hsts {
            headers.push(("strict-transport-security", hsts.as_str()));
        }
        headers
    }

    /// Insert the headers without overriding ones a handler already set
    pub fn apply(&self, headers: &mut HeaderMap) {
        for (name, value) in self.to_headers() {
            if let Ok(value) = HeaderValue::from_str(value) {
                headers
                    .entry(HeaderName::from_static(name))
                    .or_insert(value);
            }
        }
    }
}

/// Middleware adding the configured security headers to each response
pub async fn security_headers(
    State(config): State<Arc<SecurityHeadersConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    config.apply(response.headers_mut());
    response
}
