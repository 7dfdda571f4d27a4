//! User directory API service

use crate::client::users_client;
use portico_http::client::ApiClient;
use portico_http::client::error::ClientError;
use portico_http::types::UserList;

/// User directory API service
#[derive(Clone)]
pub struct UsersService {
    client: ApiClient,
}

impl UsersService {
    /// Create a service over the shared users client
    pub fn new() -> Result<Self, ClientError> {
        Ok(Self {
            client: users_client()?,
        })
    }

    /// Create a service over a specific client
    pub fn with_client(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the user directory
    pub async fn list(&self) -> Result<UserList, ClientError> {
        self.client.list_users().await
    }
}
