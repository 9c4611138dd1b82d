//! Durable client-side storage for the access/refresh token pair.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login and register pages write the pair after a successful auth call;
//! the auth provider reads the access token to derive session state and
//! clears both on logout. The server keeps its own cookie copy of the access
//! token, written independently by the token routes.
//!
//! TRADE-OFFS
//! ==========
//! Browser storage is only reachable under `hydrate`. SSR and native builds
//! see an always-empty store so server rendering stays deterministic.

#[cfg(test)]
#[path = "tokens_test.rs"]
mod tokens_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Storage key for the short-lived bearer credential.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Storage key for the long-lived refresh credential.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

// =============================================================================
// BROWSER STORAGE
// =============================================================================

/// `window.localStorage`, best-effort. Write failures are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

// =============================================================================
// MEMORY STORAGE
// =============================================================================

/// In-process store. Clones share the same map, like two handles onto one
/// browser storage area.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

// =============================================================================
// TOKEN STORE
// =============================================================================

/// Token pair persistence over any [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct TokenStore<S> {
    storage: S,
}

impl TokenStore<BrowserStorage> {
    /// Token store backed by the browser's `localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self { storage: BrowserStorage }
    }
}

impl<S: KeyValueStore> TokenStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Write both tokens, overwriting whatever was stored. No shape checks.
    pub fn save_tokens(&self, access: &str, refresh: &str) {
        self.storage.set(ACCESS_TOKEN_KEY, access);
        self.storage.set(REFRESH_TOKEN_KEY, refresh);
    }

    /// Stored access token. An empty string counts as absent.
    pub fn access_token(&self) -> Option<String> {
        self.storage.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Stored refresh token. An empty string counts as absent.
    pub fn refresh_token(&self) -> Option<String> {
        self.storage.get(REFRESH_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Remove both tokens. Safe to call when nothing is stored.
    pub fn clear_tokens(&self) {
        self.storage.remove(ACCESS_TOKEN_KEY);
        self.storage.remove(REFRESH_TOKEN_KEY);
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
