//! Browser-backed SessionStore over `window.localStorage`.

use crate::session::{SessionStore, TOKEN_KEY};

/// Persists the token in the browser's local storage, so the session
/// survives page reloads. Written by the login flow, cleared on logout.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

impl BrowserSession {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for BrowserSession {
    fn token(&self) -> Option<String> {
        let storage = Self::storage()?;
        storage
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }

    fn set_token(&self, token: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(TOKEN_KEY, token).is_err() {
                    tracing::warn!("failed to persist session token");
                }
            }
            None => tracing::warn!("localStorage unavailable, session will not persist"),
        }
    }

    fn clear_token(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
