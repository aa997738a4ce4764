//! Wire types shared between the views and the portal backend.

use serde::{Deserialize, Serialize};

/// Server-owned student profile. The local copy is a cache, refreshed on
/// load and after a successful update.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub courses: Vec<String>,
}

impl Profile {
    /// Display name, falling back to the email when no name is set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// Locally edited, unsaved copy of the profile fields. Never submitted with
/// an empty password.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub email: String,
    pub password: String,
}

/// Body for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Token issued by the login and register endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
