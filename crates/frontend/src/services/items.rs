//! Item API service

use crate::client::items_client;
use portico_http::client::ApiClient;
use portico_http::client::error::ClientError;
use portico_http::types::ItemList;

/// Item API service
#[derive(Clone)]
pub struct ItemsService {
    client: ApiClient,
}

impl ItemsService {
    /// Create a service over the shared items client
    pub fn new() -> Result<Self, ClientError> {
        Ok(Self {
            client: items_client()?,
        })
    }

    /// Create a service over a specific client
    pub fn with_client(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the item listing
    pub async fn list(&self) -> Result<ItemList, ClientError> {
        self.client.list_items().await
    }
}
