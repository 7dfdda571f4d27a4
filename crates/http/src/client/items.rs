//! Item endpoints

use super::{ApiClient, error::ClientError};
use crate::types::ItemList;
use reqwest::Method;

impl ApiClient {
    /// Fetch the item listing
    pub async fn list_items(&self) -> Result<ItemList, ClientError> {
        let request = self.request(Method::GET, "/items");
        self.execute(request).await
    }
}
