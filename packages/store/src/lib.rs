//! Session-token persistence for the StudyPort client.
//!
//! The token is an opaque bearer credential written at login, read by every
//! authenticated call, and cleared on logout, account deletion, or any
//! not-authorized response. All access goes through the [`SessionStore`]
//! trait, so the same flow logic works against browser `localStorage`
//! ([`BrowserSession`], `web` feature) or an in-memory store
//! ([`MemorySession`]) in tests and on native targets.

mod session;
pub use session::{SessionStore, TOKEN_KEY};

mod memory;
pub use memory::MemorySession;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use browser::BrowserSession;
