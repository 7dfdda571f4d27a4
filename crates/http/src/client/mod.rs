//! Portico HTTP client

pub mod auth;
pub mod error;
pub mod intercept;
pub mod items;
pub mod token;
pub mod users;

use error::ClientError;
use intercept::{RequestInterceptor, RequestParts};
use reqwest::{Client, ClientBuilder};
use std::sync::Arc;
use std::time::Duration;
use token::{MemoryTokenStore, TokenStore};

/// User agent reported by every client instance
const USER_AGENT: &str = "portico-client/0.1.0";

/// Portico API client
///
/// Each backend resource (auth, users, items) gets its own instance; all of
/// them route their requests through the same [`RequestInterceptor`]
/// behavior.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    interceptor: RequestInterceptor,
}

impl ApiClient {
    /// Create a new client over the given API base with default configuration
    pub fn new(api_base: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().api_base(api_base).build()
    }

    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Base URL relative request paths are rebased onto
    pub fn api_base(&self) -> &str {
        self.interceptor.api_base()
    }

    /// Token store consulted on every request
    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        self.interceptor.token_store()
    }

    /// Store a token for all subsequent requests
    pub fn set_token(&self, token: &str) {
        self.interceptor.token_store().set(token);
    }

    /// Drop the stored token
    pub fn clear_token(&self) {
        self.interceptor.token_store().clear();
    }

    /// Create a request builder with the interceptor applied
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut parts = RequestParts::new(path);
        self.interceptor.intercept(&mut parts);
        self.client.request(method, parts.url).headers(parts.headers)
    }

    /// Execute a request and decode the response body
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    api_base: Option<String>,
    token_store: Option<Arc<dyn TokenStore>>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ApiClientBuilder {
    /// Set the API base URL
    ///
    /// Leaving it unset (or empty) is valid: relative paths are then sent
    /// unprefixed, which is what happens outside a page context.
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into());
        self
    }

    /// Set the token store consulted on every request
    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.token_store = Some(store);
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        // Ensure the base ends without a trailing slash
        let api_base = self
            .api_base
            .map(|base| base.trim_end_matches('/').to_string())
            .unwrap_or_default();

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        #[cfg(target_arch = "wasm32")]
        let _ = self.timeout; // Timeouts not supported on WASM

        if let Some(user_agent) = self.user_agent {
            client_builder = client_builder.user_agent(user_agent);
        } else {
            client_builder = client_builder.user_agent(USER_AGENT);
        }

        let client = client_builder.build()?;

        let tokens = self
            .token_store
            .unwrap_or_else(|| Arc::new(MemoryTokenStore::new()));

        Ok(ApiClient {
            client,
            interceptor: RequestInterceptor::new(api_base, tokens),
        })
    }
}
