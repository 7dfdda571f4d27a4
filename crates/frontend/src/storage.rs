//! Login token persistence

use portico_http::client::token::TokenStore;

/// Token store backed by browser local storage
///
/// Reads and writes the token under [`ApiConfig::TOKEN_KEY`]. Outside a
/// page context there is no storage: reads come back empty and writes are
/// dropped. Both are valid states, not errors.
///
/// [`ApiConfig::TOKEN_KEY`]: crate::config::ApiConfig::TOKEN_KEY
#[derive(Clone, Copy, Default)]
pub struct BrowserTokenStore;

impl BrowserTokenStore {
    /// Create a new store
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        local_storage().and_then(|storage| {
            storage
                .get_item(crate::config::ApiConfig::TOKEN_KEY)
                .ok()
                .flatten()
        })
    }

    fn set(&self, token: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(crate::config::ApiConfig::TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(crate::config::ApiConfig::TOKEN_KEY);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        None
    }

    fn set(&self, _token: &str) {}

    fn clear(&self) {}
}
