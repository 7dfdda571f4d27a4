//! Authentication endpoints

use super::{ApiClient, error::ClientError};
use crate::types::{LogoutResponse, ServiceHealth, Token, UserCreate, UserPublic, VerifiedUser};
use reqwest::Method;

impl ApiClient {
    /// OAuth2 compatible password login
    ///
    /// Posts the credentials as a url-encoded form and returns the issued
    /// bearer token. Persisting the token is the caller's job.
    pub async fn login_access_token(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Token, ClientError> {
        let request = self
            .request(Method::POST, "/login/access-token")
            .form(&[("username", username), ("password", password)]);
        self.execute(request).await
    }

    /// Create a new user account
    pub async fn register_user(&self, user: &UserCreate) -> Result<UserPublic, ClientError> {
        let request = self.request(Method::POST, "/users/").json(user);
        self.execute(request).await
    }

    /// Check the attached bearer token against the verification endpoint
    pub async fn verify_token(&self) -> Result<VerifiedUser, ClientError> {
        let request = self.request(Method::GET, "/auth/verify");
        self.execute(request).await
    }

    /// Server-side logout
    ///
    /// The backend does not blacklist tokens; discarding the stored copy is
    /// up to the caller.
    pub async fn logout(&self) -> Result<LogoutResponse, ClientError> {
        let request = self.request(Method::POST, "/logout");
        self.execute(request).await
    }

    /// Health probe
    pub async fn health(&self) -> Result<ServiceHealth, ClientError> {
        let request = self.request(Method::GET, "/health");
        self.execute(request).await
    }
}
