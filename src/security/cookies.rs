// ABOUTME: Secure cookie builder and parser for the session token
// ABOUTME: Issues HttpOnly SameSite=Strict cookies and reads cookies from request headers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::session::COOKIE_NAME;
use axum::http::{header, HeaderMap, HeaderValue};
use std::fmt;
use tracing::warn;

/// `SameSite` attribute values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    /// Never sent cross-site
    Strict,
    /// Sent on top-level navigation
    Lax,
    /// Always sent (requires `Secure`)
    None,
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "Strict"),
            Self::Lax => write!(f, "Lax"),
            Self::None => write!(f, "None"),
        }
    }
}

/// Cookie attributes
#[derive(Debug, Clone)]
pub struct SecureCookieConfig {
    /// Cookie name
    pub name: String,
    /// Cookie value
    pub value: String,
    /// Lifetime in seconds; 0 expires the cookie immediately
    pub max_age_secs: i64,
    /// Hide the cookie from scripts
    pub http_only: bool,
    /// Only send over HTTPS
    pub secure: bool,
    /// Cross-site policy
    pub same_site: SameSite,
    /// Cookie path
    pub path: String,
}

impl SecureCookieConfig {
    /// `HttpOnly; Secure; SameSite=Strict; Path=/` cookie
    #[must_use]
    pub fn new(name: String, value: String, max_age_secs: i64) -> Self {
        Self {
            name,
            value,
            max_age_secs,
            http_only: true,
            secure: true,
            same_site: SameSite::Strict,
            path: "/".to_owned(),
        }
    }

    /// Toggle the `Secure` attribute
    #[must_use]
    pub const fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Render the `Set-Cookie` header value
    #[must_use]
    pub fn build(&self) -> String {
        let mut cookie = format!(
            "{}={}; Path={}; Max-Age={}; SameSite={}",
            self.name, self.value, self.path, self.max_age_secs, self.same_site
        );
        if self.http_only {
            cookie.push_str("; HttpOnly");
        }
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }

    fn append_to(&self, headers: &mut HeaderMap) {
        match HeaderValue::from_str(&self.build()) {
            Ok(value) => {
                headers.append(header::SET_COOKIE, value);
            }
            Err(e) => warn!(cookie = %self.name, error = %e, "Cookie value is not a valid header"),
        }
    }
}

/// Attach the session cookie carrying `token`
pub fn set_session_cookie(headers: &mut HeaderMap, token: &str, max_age_secs: i64, secure: bool) {
    SecureCookieConfig::new(COOKIE_NAME.to_owned(), token.to_owned(), max_age_secs)
        .with_secure(secure)
        .append_to(headers);
}

/// Expire the session cookie
pub fn clear_session_cookie(headers: &mut HeaderMap, secure: bool) {
    SecureCookieConfig::new(COOKIE_NAME.to_owned(), String::new(), 0)
        .with_secure(secure)
        .append_to(headers);
}

/// Value of cookie `name` from the request's `Cookie` headers
#[must_use]
pub fn get_cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_owned())
}
