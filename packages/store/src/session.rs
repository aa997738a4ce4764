/// Well-known storage key under which the session token lives.
pub const TOKEN_KEY: &str = "studyport_token";

/// Interface to wherever the session token is persisted.
///
/// Object-safe so a view can hold `Rc<dyn SessionStore>` without caring
/// which backend it got.
pub trait SessionStore {
    /// Returns the stored token, if any. An empty string counts as absent.
    fn token(&self) -> Option<String>;

    /// Persists a freshly issued token.
    fn set_token(&self, token: &str);

    /// Removes the token, ending the session locally.
    fn clear_token(&self);
}
