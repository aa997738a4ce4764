use std::sync::{Arc, Mutex};

use crate::session::SessionStore;

/// In-memory SessionStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemorySession {
    token: Arc<Mutex<Option<String>>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds a token, handy in tests.
    pub fn with_token(token: &str) -> Self {
        let session = Self::new();
        session.set_token(token);
        session
    }
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap()
            .clone()
            .filter(|t| !t.is_empty())
    }

    fn set_token(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn clear_token(&self) {
        *self.token.lock().unwrap() = None;
    }
}
