//! User directory endpoints

use super::{ApiClient, error::ClientError};
use crate::types::UserList;
use reqwest::Method;

impl ApiClient {
    /// Fetch the user directory
    pub async fn list_users(&self) -> Result<UserList, ClientError> {
        let request = self.request(Method::GET, "/users");
        self.execute(request).await
    }
}
