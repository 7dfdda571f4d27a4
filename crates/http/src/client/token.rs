//! Token storage seam

use std::sync::RwLock;

/// Shared access to the persisted login token
///
/// The token is written by the login flow and read on every outgoing
/// request. Implementations decide where it actually lives; an empty store
/// is a valid state, not an error.
pub trait TokenStore: Send + Sync {
    /// Currently stored token, if any
    fn get(&self) -> Option<String>;

    /// Store or overwrite the token
    fn set(&self, token: &str);

    /// Remove the stored token
    fn clear(&self);
}

/// In-memory token store
///
/// Used on targets without browser storage and in tests.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a token
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RwLock::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.read().expect("token lock poisoned").clone()
    }

    fn set(&self, token: &str) {
        *self.token.write().expect("token lock poisoned") = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.write().expect("token lock poisoned") = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        assert!(MemoryTokenStore::new().get().is_none());
    }

    #[test]
    fn set_overwrites_the_previous_token() {
        let store = MemoryTokenStore::with_token("first");
        store.set("second");
        assert_eq!(store.get().as_deref(), Some("second"));
    }

    #[test]
    fn clear_removes_the_token() {
        let store = MemoryTokenStore::with_token("stale");
        store.clear();
        assert!(store.get().is_none());
    }
}
