//! Session context and hooks for the UI.
//!
//! Views never touch browser storage directly: they receive a [`Session`]
//! object exposing read/write/clear over wherever the token actually lives,
//! which keeps every view testable against an in-memory store.

use std::rc::Rc;

use api::{ApiConfig, HttpApi};
use dioxus::prelude::*;
use store::SessionStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
use store::BrowserSession;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
use store::MemorySession;

/// Session context object handed to the views.
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn SessionStore>,
}

impl Session {
    /// Wraps a concrete store. Views normally obtain this via [`use_session`].
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self {
            store: Rc::new(store),
        }
    }

    /// Platform default: browser localStorage on the web, an in-memory
    /// store elsewhere.
    pub fn platform_default() -> Self {
        #[cfg(all(target_arch = "wasm32", feature = "web"))]
        {
            Self::new(BrowserSession::new())
        }
        #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
        {
            Self::new(MemorySession::new())
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.token().is_some()
    }
}

impl SessionStore for Session {
    fn token(&self) -> Option<String> {
        self.store.token()
    }

    fn set_token(&self, token: &str) {
        self.store.set_token(token)
    }

    fn clear_token(&self) {
        self.store.clear_token()
    }
}

/// Get the session context provided by [`SessionProvider`].
pub fn use_session() -> Session {
    use_context::<Session>()
}

/// Get the shared API client.
pub fn use_api() -> HttpApi {
    use_context::<HttpApi>()
}

/// Provider component that owns the session store and the API client.
/// Wrap the app with this component to enable [`use_session`] and
/// [`use_api`] in the views below it.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    use_context_provider(|| {
        let session = Session::platform_default();
        if session.is_authenticated() {
            tracing::debug!("restored existing session");
        }
        session
    });
    use_context_provider(|| HttpApi::new(ApiConfig::load()));

    rsx! {
        {children}
    }
}
