//! Outgoing request rewriting

use super::token::TokenStore;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use std::sync::Arc;

/// Mutable parts of an outgoing request, before it reaches the HTTP machinery
#[derive(Debug, Clone)]
pub struct RequestParts {
    pub url: String,
    pub headers: HeaderMap,
}

impl RequestParts {
    /// Create request parts for the given url with empty headers
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HeaderMap::new(),
        }
    }
}

/// Rewrites every outgoing request before dispatch
///
/// Relative paths (leading `/`) are rebased onto the API base URL and the
/// stored token rides along as a bearer credential. A missing base leaves
/// the path unprefixed and a missing token leaves the headers untouched;
/// neither is a failure.
#[derive(Clone)]
pub struct RequestInterceptor {
    api_base: String,
    tokens: Arc<dyn TokenStore>,
}

impl RequestInterceptor {
    /// Create an interceptor over the given base URL and token store
    pub fn new(api_base: impl Into<String>, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            api_base: api_base.into(),
            tokens,
        }
    }

    /// Base URL relative paths are rebased onto
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Store the token is read from
    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// Apply the rewrite to one request
    ///
    /// The token is looked up here, not at construction time, so a login
    /// that happened after the client was built is picked up immediately.
    pub fn intercept(&self, parts: &mut RequestParts) {
        if parts.url.starts_with('/') {
            parts.url = format!("{}{}", self.api_base, parts.url);
        }

        if let Some(token) = self.tokens.get() {
            match HeaderValue::from_str(&format!("Bearer {token}")) {
                Ok(value) => {
                    parts.headers.insert(AUTHORIZATION, value);
                }
                Err(_) => {
                    tracing::warn!("stored token is not a valid header value, sending without it");
                }
            }
        }
    }
}
