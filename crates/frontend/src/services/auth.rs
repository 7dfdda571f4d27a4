//! Authentication API service

use crate::client::auth_client;
use portico_http::client::ApiClient;
use portico_http::client::error::ClientError;
use portico_http::types::{LogoutResponse, Token, UserCreate, UserPublic, VerifiedUser};

/// Authentication API service
#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    /// Create a service over the shared auth client
    pub fn new() -> Result<Self, ClientError> {
        Ok(Self {
            client: auth_client()?,
        })
    }

    /// Create a service over a specific client
    pub fn with_client(client: ApiClient) -> Self {
        Self { client }
    }

    /// Log in and persist the issued token
    ///
    /// Every later request on any client sharing the token store picks the
    /// token up automatically.
    pub async fn login(&self, username: &str, password: &str) -> Result<Token, ClientError> {
        let token = self.client.login_access_token(username, password).await?;
        self.client.set_token(&token.access_token);
        tracing::debug!("login succeeded, token stored");
        Ok(token)
    }

    /// Create a new account
    pub async fn register(&self, user: &UserCreate) -> Result<UserPublic, ClientError> {
        self.client.register_user(user).await
    }

    /// Check the stored token against the backend
    pub async fn verify(&self) -> Result<VerifiedUser, ClientError> {
        self.client.verify_token().await
    }

    /// Log out and drop the stored token
    ///
    /// The backend does not blacklist tokens, so discarding the local copy
    /// is what actually ends the session.
    pub async fn logout(&self) -> Result<LogoutResponse, ClientError> {
        let response = self.client.logout().await?;
        self.client.clear_token();
        tracing::debug!("logged out, token cleared");
        Ok(response)
    }
}
