//! Frontend configuration

/// API client configuration
pub struct ApiConfig;

impl ApiConfig {
    /// Path prefix every backend route lives under
    pub const API_PREFIX: &'static str = "/api/v1";

    /// Local storage key holding the login token
    pub const TOKEN_KEY: &'static str = "token";
}
