//! Common wire types shared by the per-resource clients

use serde::{Deserialize, Serialize};

/// Bearer token issued by the login endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

/// New account payload for registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub email: String,
    pub password: String,
    /// Optional display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Public view of a user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPublic {
    pub id: i64,
    pub email: String,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_superuser: bool,
}

/// Identity confirmed by the token verification endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifiedUser {
    pub user_id: i64,
    pub email: String,
    pub is_active: bool,
}

/// User directory listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserList {
    pub users: Vec<String>,
}

/// Item listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemList {
    pub items: Vec<String>,
}

/// Health probe response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Logout acknowledgement
///
/// The backend does not blacklist tokens; `note` reminds the caller that
/// dropping the stored token is what actually ends the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
    pub note: String,
}
