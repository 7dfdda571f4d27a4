//! Client configuration and initialization

use crate::config::ApiConfig;
use crate::storage::BrowserTokenStore;
use once_cell::sync::Lazy;
use portico_http::client::ApiClient;
use portico_http::client::error::ClientError;
use std::sync::{Arc, Mutex};

/// Global client instances, one per backend resource
static AUTH_CLIENT: Lazy<Mutex<Option<ApiClient>>> = Lazy::new(|| Mutex::new(None));
static USERS_CLIENT: Lazy<Mutex<Option<ApiClient>>> = Lazy::new(|| Mutex::new(None));
static ITEMS_CLIENT: Lazy<Mutex<Option<ApiClient>>> = Lazy::new(|| Mutex::new(None));

/// Scheme and host of the current page, without the port
///
/// In production everything rides the same domain, so the port is
/// deliberately dropped rather than copied from the page address.
#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    let location = web_sys::window()?.location();
    let protocol = location.protocol().ok()?;
    let hostname = location.hostname().ok()?;
    Some(format!("{protocol}//{hostname}"))
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

/// Get the base URL for API calls
///
/// Empty outside a page context, which leaves relative paths untouched.
fn api_base() -> String {
    match page_origin() {
        Some(origin) => format!("{origin}{}", ApiConfig::API_PREFIX),
        None => String::new(),
    }
}

fn resource_client(slot: &Lazy<Mutex<Option<ApiClient>>>) -> Result<ApiClient, ClientError> {
    let mut client_lock = slot.lock().expect("Failed to acquire client lock");

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let client = ApiClient::builder()
        .api_base(api_base())
        .token_store(Arc::new(BrowserTokenStore::new()))
        .build()?;
    *client_lock = Some(client.clone());
    Ok(client)
}

/// Get the shared client for the authentication service
pub fn auth_client() -> Result<ApiClient, ClientError> {
    resource_client(&AUTH_CLIENT)
}

/// Get the shared client for the user service
pub fn users_client() -> Result<ApiClient, ClientError> {
    resource_client(&USERS_CLIENT)
}

/// Get the shared client for the item service
pub fn items_client() -> Result<ApiClient, ClientError> {
    resource_client(&ITEMS_CLIENT)
}
