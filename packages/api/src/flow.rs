//! Session guard and profile synchronization.
//!
//! This module is the page's decision logic, kept out of the view layer so it
//! can be exercised natively. Each operation reads the token from the
//! injected [`SessionStore`], issues at most one network call, and reports
//! what happened as an outcome value. The view applies outcomes to a
//! [`PageState`] through its transition methods and performs whatever
//! [`Redirect`] they return.
//!
//! Mode transitions: `Viewing --edit--> Editing`,
//! `Editing --save(ok)--> Viewing`, `Editing --save(err)--> Editing`,
//! `Editing --cancel--> Viewing`.
//!
//! Any not-authorized response clears the stored token, on read, update, and
//! delete alike, and every such path redirects to the login page.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use store::SessionStore;

use crate::client::StudentApi;
use crate::error::ApiError;
use crate::models::{Profile, ProfileDraft, RegisterRequest};

const NOT_SIGNED_IN: &str = "You are not signed in.";

/// Where the caller should send the user after applying an outcome. The
/// flow functions only ever redirect to `Login`; the other targets exist for
/// the views' own navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Redirect {
    Login,
    Home,
    Profile,
}

/// Whether the profile is being displayed or edited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Viewing,
    Editing,
}

/// Cooperative cancellation for in-flight page work. The view cancels its
/// flag on unmount; a flow function whose flag was cancelled while the
/// request was in flight discards the result instead of reporting it, so no
/// state update can reach a dead view.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Result of the mount-time load.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome {
    /// Profile fetched; cache it and seed the draft.
    Loaded(Profile),
    /// No usable session. Any stored token has been cleared.
    Denied { message: String },
    /// Non-auth failure. The profile stays unset and the loading indicator
    /// stays up.
    Failed { message: String },
}

/// Result of submitting the edit form.
#[derive(Clone, Debug, PartialEq)]
pub enum SaveOutcome {
    /// Server accepted the update; its response replaces the cached profile.
    Saved(Profile),
    /// Rejected locally before any network call.
    Invalid { message: String },
    Denied { message: String },
    Failed { message: String },
}

/// Result of the account-deletion request.
#[derive(Clone, Debug, PartialEq)]
pub enum DeleteOutcome {
    Deleted,
    Denied { message: String },
    /// The account and the session both survive; only an error is shown.
    Failed { message: String },
}

/// Result of the login and registration flows.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthOutcome {
    /// Token stored; the user is signed in.
    SignedIn,
    /// Rejected locally or bad credentials; no session change.
    Invalid { message: String },
    Failed { message: String },
}

/// Local state of the profile page. Views hold this in a signal and mutate
/// it only through the transition methods.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub profile: Option<Profile>,
    pub draft: ProfileDraft,
    pub mode: ViewMode,
    pub error: Option<String>,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The page shows its loading indicator until the first successful fetch
    /// populates the profile.
    pub fn is_loading(&self) -> bool {
        self.profile.is_none()
    }

    pub fn begin_edit(&mut self) {
        if self.profile.is_some() {
            self.mode = ViewMode::Editing;
            self.error = None;
        }
    }

    /// Leaves edit mode, dropping the draft in favor of the cached profile.
    pub fn cancel_edit(&mut self) {
        self.mode = ViewMode::Viewing;
        self.error = None;
        self.reset_draft();
    }

    pub fn apply_load(&mut self, outcome: LoadOutcome) -> Option<Redirect> {
        match outcome {
            LoadOutcome::Loaded(profile) => {
                self.profile = Some(profile);
                self.reset_draft();
                self.error = None;
                None
            }
            LoadOutcome::Denied { message } => {
                self.error = Some(message);
                Some(Redirect::Login)
            }
            LoadOutcome::Failed { message } => {
                self.error = Some(message);
                None
            }
        }
    }

    pub fn apply_save(&mut self, outcome: SaveOutcome) -> Option<Redirect> {
        match outcome {
            SaveOutcome::Saved(profile) => {
                self.profile = Some(profile);
                self.reset_draft();
                self.mode = ViewMode::Viewing;
                self.error = None;
                None
            }
            SaveOutcome::Invalid { message } | SaveOutcome::Failed { message } => {
                self.error = Some(message);
                None
            }
            SaveOutcome::Denied { message } => {
                self.error = Some(message);
                Some(Redirect::Login)
            }
        }
    }

    pub fn apply_delete(&mut self, outcome: DeleteOutcome) -> Option<Redirect> {
        match outcome {
            DeleteOutcome::Deleted => Some(Redirect::Login),
            DeleteOutcome::Denied { message } => {
                self.error = Some(message);
                Some(Redirect::Login)
            }
            DeleteOutcome::Failed { message } => {
                self.error = Some(message);
                None
            }
        }
    }

    /// Seeds the draft from the cached profile: email copied, password blank.
    fn reset_draft(&mut self) {
        self.draft = ProfileDraft {
            email: self
                .profile
                .as_ref()
                .map(|p| p.email.clone())
                .unwrap_or_default(),
            password: String::new(),
        };
    }
}

/// Mount-time guard + fetch. With no stored token this performs no network
/// call. Returns `None` when the flag was cancelled while the request was in
/// flight.
pub async fn load_profile<A, S>(api: &A, session: &S, cancel: &CancelFlag) -> Option<LoadOutcome>
where
    A: StudentApi,
    S: SessionStore,
{
    let Some(token) = session.token() else {
        return Some(LoadOutcome::Denied {
            message: NOT_SIGNED_IN.to_string(),
        });
    };

    let result = api.fetch_profile(&token).await;
    if cancel.is_cancelled() {
        return None;
    }

    Some(match result {
        Ok(profile) => LoadOutcome::Loaded(profile),
        Err(err) if err.is_auth_failure() => {
            session.clear_token();
            LoadOutcome::Denied {
                message: err.to_string(),
            }
        }
        Err(err) => {
            tracing::error!("profile load failed: {err}");
            LoadOutcome::Failed {
                message: err.to_string(),
            }
        }
    })
}

/// Submits the draft. An empty password is rejected locally, before any
/// network call.
pub async fn save_profile<A, S>(
    api: &A,
    session: &S,
    draft: &ProfileDraft,
    cancel: &CancelFlag,
) -> Option<SaveOutcome>
where
    A: StudentApi,
    S: SessionStore,
{
    if draft.password.trim().is_empty() {
        return Some(SaveOutcome::Invalid {
            message: "Please enter your password to save changes.".to_string(),
        });
    }

    let Some(token) = session.token() else {
        return Some(SaveOutcome::Denied {
            message: NOT_SIGNED_IN.to_string(),
        });
    };

    let result = api.update_profile(&token, draft).await;
    if cancel.is_cancelled() {
        return None;
    }

    Some(match result {
        Ok(profile) => SaveOutcome::Saved(profile),
        Err(err) if err.is_auth_failure() => {
            session.clear_token();
            SaveOutcome::Denied {
                message: err.to_string(),
            }
        }
        Err(err) => {
            tracing::error!("profile save failed: {err}");
            SaveOutcome::Failed {
                message: err.to_string(),
            }
        }
    })
}

/// Deletes the account. Success clears the session regardless of what the
/// response body contained; failure leaves the token intact.
pub async fn delete_account<A, S>(
    api: &A,
    session: &S,
    cancel: &CancelFlag,
) -> Option<DeleteOutcome>
where
    A: StudentApi,
    S: SessionStore,
{
    let Some(token) = session.token() else {
        return Some(DeleteOutcome::Denied {
            message: NOT_SIGNED_IN.to_string(),
        });
    };

    let result = api.delete_account(&token).await;
    if cancel.is_cancelled() {
        return None;
    }

    Some(match result {
        Ok(()) => {
            session.clear_token();
            DeleteOutcome::Deleted
        }
        Err(err) if err.is_auth_failure() => {
            session.clear_token();
            DeleteOutcome::Denied {
                message: err.to_string(),
            }
        }
        Err(err) => {
            tracing::error!("account deletion failed: {err}");
            DeleteOutcome::Failed {
                message: err.to_string(),
            }
        }
    })
}

/// Local-only: clears the token and sends the user to the login page. No
/// network call.
pub fn logout<S: SessionStore>(session: &S) -> Redirect {
    session.clear_token();
    Redirect::Login
}

/// Exchanges credentials for a token and stores it.
pub async fn sign_in<A, S>(
    api: &A,
    session: &S,
    email: &str,
    password: &str,
    cancel: &CancelFlag,
) -> Option<AuthOutcome>
where
    A: StudentApi,
    S: SessionStore,
{
    let email = email.trim();
    if email.is_empty() {
        return Some(AuthOutcome::Invalid {
            message: "Please enter your email".to_string(),
        });
    }
    if password.is_empty() {
        return Some(AuthOutcome::Invalid {
            message: "Please enter your password".to_string(),
        });
    }

    let result = api.login(email, password).await;
    if cancel.is_cancelled() {
        return None;
    }

    Some(match result {
        Ok(response) => {
            session.set_token(&response.token);
            AuthOutcome::SignedIn
        }
        Err(ApiError::Unauthorized) => AuthOutcome::Invalid {
            message: "Invalid email or password".to_string(),
        },
        Err(err) => AuthOutcome::Failed {
            message: err.to_string(),
        },
    })
}

/// Registers a new account and stores the issued token.
pub async fn sign_up<A, S>(
    api: &A,
    session: &S,
    request: &RegisterRequest,
    confirm_password: &str,
    cancel: &CancelFlag,
) -> Option<AuthOutcome>
where
    A: StudentApi,
    S: SessionStore,
{
    let name = request.name.trim().to_string();
    let email = request.email.trim().to_lowercase();

    if name.is_empty() {
        return Some(AuthOutcome::Invalid {
            message: "Name is required".to_string(),
        });
    }
    if email.is_empty() || !email.contains('@') {
        return Some(AuthOutcome::Invalid {
            message: "Please enter a valid email".to_string(),
        });
    }
    if request.password.len() < 8 {
        return Some(AuthOutcome::Invalid {
            message: "Password must be at least 8 characters".to_string(),
        });
    }
    if request.password != confirm_password {
        return Some(AuthOutcome::Invalid {
            message: "Passwords do not match".to_string(),
        });
    }

    let request = RegisterRequest {
        name,
        email,
        password: request.password.clone(),
    };

    let result = api.register(&request).await;
    if cancel.is_cancelled() {
        return None;
    }

    Some(match result {
        Ok(response) => {
            session.set_token(&response.token);
            AuthOutcome::SignedIn
        }
        Err(err) => AuthOutcome::Failed {
            message: err.to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use store::{MemorySession, SessionStore};

    use super::*;
    use crate::models::TokenResponse;

    /// Recording [`StudentApi`] double. Every network call is appended to
    /// `calls`; unstubbed endpoints panic.
    #[derive(Default)]
    struct FakeApi {
        calls: Mutex<Vec<&'static str>>,
        profile: Option<Result<Profile, ApiError>>,
        update: Option<Result<Profile, ApiError>>,
        delete: Option<Result<(), ApiError>>,
        auth: Option<Result<TokenResponse, ApiError>>,
    }

    impl FakeApi {
        fn record(&self, call: &'static str) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl StudentApi for FakeApi {
        async fn login(&self, _email: &str, _password: &str) -> Result<TokenResponse, ApiError> {
            self.record("login");
            self.auth.clone().expect("login not stubbed")
        }

        async fn register(&self, _request: &RegisterRequest) -> Result<TokenResponse, ApiError> {
            self.record("register");
            self.auth.clone().expect("register not stubbed")
        }

        async fn fetch_profile(&self, _token: &str) -> Result<Profile, ApiError> {
            self.record("fetch");
            self.profile.clone().expect("fetch not stubbed")
        }

        async fn update_profile(
            &self,
            _token: &str,
            _draft: &ProfileDraft,
        ) -> Result<Profile, ApiError> {
            self.record("update");
            self.update.clone().expect("update not stubbed")
        }

        async fn delete_account(&self, _token: &str) -> Result<(), ApiError> {
            self.record("delete");
            self.delete.clone().expect("delete not stubbed")
        }
    }

    fn student() -> Profile {
        Profile {
            email: "jane@example.edu".to_string(),
            name: Some("Jane Doe".to_string()),
            courses: vec!["Mathematics".to_string(), "Physics".to_string()],
        }
    }

    fn editing_state() -> PageState {
        let mut state = PageState::new();
        state.apply_load(LoadOutcome::Loaded(student()));
        state.begin_edit();
        state
    }

    #[tokio::test]
    async fn mount_without_token_redirects_without_network() {
        let api = FakeApi::default();
        let session = MemorySession::new();
        let cancel = CancelFlag::new();

        let outcome = load_profile(&api, &session, &cancel).await.unwrap();

        assert!(api.calls().is_empty());

        let mut state = PageState::new();
        assert_eq!(state.apply_load(outcome), Some(Redirect::Login));
        assert!(state.error.is_some());
        assert!(state.is_loading());
    }

    #[tokio::test]
    async fn load_populates_email_from_response_body() {
        let api = FakeApi {
            profile: Some(Ok(student())),
            ..Default::default()
        };
        let session = MemorySession::with_token("tok-1");
        let cancel = CancelFlag::new();

        let outcome = load_profile(&api, &session, &cancel).await.unwrap();

        let mut state = PageState::new();
        assert_eq!(state.apply_load(outcome), None);
        assert_eq!(api.calls(), vec!["fetch"]);

        let profile = state.profile.as_ref().unwrap();
        assert_eq!(profile.email, "jane@example.edu");
        // Draft seeded with the email, password left blank.
        assert_eq!(state.draft.email, "jane@example.edu");
        assert!(state.draft.password.is_empty());
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn load_failure_keeps_loading_indicator_and_token() {
        let api = FakeApi {
            profile: Some(Err(ApiError::Http {
                status: 500,
                message: "boom".to_string(),
            })),
            ..Default::default()
        };
        let session = MemorySession::with_token("tok-1");
        let cancel = CancelFlag::new();

        let outcome = load_profile(&api, &session, &cancel).await.unwrap();

        let mut state = PageState::new();
        assert_eq!(state.apply_load(outcome), None);
        assert!(state.error.is_some());
        assert!(state.is_loading());
        assert_eq!(session.token(), Some("tok-1".to_string()));
    }

    #[tokio::test]
    async fn rejected_token_clears_session_then_next_mount_skips_network() {
        let api = FakeApi {
            profile: Some(Err(ApiError::Unauthorized)),
            ..Default::default()
        };
        let session = MemorySession::with_token("stale");
        let cancel = CancelFlag::new();

        let outcome = load_profile(&api, &session, &cancel).await.unwrap();
        assert_eq!(session.token(), None);

        let mut state = PageState::new();
        assert_eq!(state.apply_load(outcome), Some(Redirect::Login));

        // A remount now behaves exactly like the no-token case.
        let api = FakeApi::default();
        let outcome = load_profile(&api, &session, &cancel).await.unwrap();
        assert!(api.calls().is_empty());
        assert!(matches!(outcome, LoadOutcome::Denied { .. }));
    }

    #[tokio::test]
    async fn save_with_empty_password_is_rejected_locally() {
        let api = FakeApi::default();
        let session = MemorySession::with_token("tok-1");
        let cancel = CancelFlag::new();

        let mut state = editing_state();
        state.draft.email = "new@example.edu".to_string();

        let outcome = save_profile(&api, &session, &state.draft, &cancel)
            .await
            .unwrap();

        assert!(api.calls().is_empty());
        assert_eq!(state.apply_save(outcome), None);
        assert!(state.error.is_some());
        assert_eq!(state.mode, ViewMode::Editing);
    }

    #[tokio::test]
    async fn successful_save_returns_to_viewing_with_server_fields() {
        let updated = Profile {
            email: "server@example.edu".to_string(),
            name: Some("Jane Q. Doe".to_string()),
            courses: vec![],
        };
        let api = FakeApi {
            update: Some(Ok(updated.clone())),
            ..Default::default()
        };
        let session = MemorySession::with_token("tok-1");
        let cancel = CancelFlag::new();

        let mut state = editing_state();
        state.draft.email = "draft@example.edu".to_string();
        state.draft.password = "secret123".to_string();

        let outcome = save_profile(&api, &session, &state.draft, &cancel)
            .await
            .unwrap();

        assert_eq!(state.apply_save(outcome), None);
        assert_eq!(state.mode, ViewMode::Viewing);
        // Displayed fields come from the response body, not the draft.
        assert_eq!(state.profile, Some(updated));
        assert_eq!(state.draft.email, "server@example.edu");
        assert!(state.draft.password.is_empty());
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn failed_save_stays_in_editing_mode() {
        let api = FakeApi {
            update: Some(Err(ApiError::Http {
                status: 500,
                message: "boom".to_string(),
            })),
            ..Default::default()
        };
        let session = MemorySession::with_token("tok-1");
        let cancel = CancelFlag::new();

        let mut state = editing_state();
        state.draft.password = "secret123".to_string();

        let outcome = save_profile(&api, &session, &state.draft, &cancel)
            .await
            .unwrap();

        assert_eq!(state.apply_save(outcome), None);
        assert_eq!(state.mode, ViewMode::Editing);
        assert!(state.error.is_some());
    }

    #[tokio::test]
    async fn expired_session_on_save_clears_token_and_redirects() {
        let api = FakeApi {
            update: Some(Err(ApiError::Unauthorized)),
            ..Default::default()
        };
        let session = MemorySession::with_token("stale");
        let cancel = CancelFlag::new();

        let mut state = editing_state();
        state.draft.password = "secret123".to_string();

        let outcome = save_profile(&api, &session, &state.draft, &cancel)
            .await
            .unwrap();

        assert_eq!(session.token(), None);
        assert_eq!(state.apply_save(outcome), Some(Redirect::Login));
    }

    #[tokio::test]
    async fn delete_success_clears_token_and_redirects() {
        let api = FakeApi {
            delete: Some(Ok(())),
            ..Default::default()
        };
        let session = MemorySession::with_token("tok-1");
        let cancel = CancelFlag::new();

        let outcome = delete_account(&api, &session, &cancel).await.unwrap();

        assert_eq!(session.token(), None);
        let mut state = PageState::new();
        state.apply_load(LoadOutcome::Loaded(student()));
        assert_eq!(state.apply_delete(outcome), Some(Redirect::Login));
    }

    #[tokio::test]
    async fn delete_failure_keeps_token_and_shows_error() {
        let api = FakeApi {
            delete: Some(Err(ApiError::Http {
                status: 500,
                message: "boom".to_string(),
            })),
            ..Default::default()
        };
        let session = MemorySession::with_token("tok-1");
        let cancel = CancelFlag::new();

        let outcome = delete_account(&api, &session, &cancel).await.unwrap();

        assert_eq!(session.token(), Some("tok-1".to_string()));
        let mut state = PageState::new();
        assert_eq!(state.apply_delete(outcome), None);
        assert!(state.error.is_some());
    }

    #[tokio::test]
    async fn logout_is_local_only() {
        let session = MemorySession::with_token("tok-1");

        assert_eq!(logout(&session), Redirect::Login);
        assert_eq!(session.token(), None);
    }

    #[tokio::test]
    async fn cancelled_flows_report_nothing() {
        let api = FakeApi {
            profile: Some(Ok(student())),
            update: Some(Ok(student())),
            delete: Some(Ok(())),
            ..Default::default()
        };
        let session = MemorySession::with_token("tok-1");
        let cancel = CancelFlag::new();
        cancel.cancel();

        let draft = ProfileDraft {
            email: "jane@example.edu".to_string(),
            password: "secret123".to_string(),
        };

        assert_eq!(load_profile(&api, &session, &cancel).await, None);
        assert_eq!(save_profile(&api, &session, &draft, &cancel).await, None);
        assert_eq!(delete_account(&api, &session, &cancel).await, None);
    }

    #[tokio::test]
    async fn edit_and_cancel_transitions() {
        let mut state = PageState::new();

        // Editing is unreachable before the profile loads.
        state.begin_edit();
        assert_eq!(state.mode, ViewMode::Viewing);

        state.apply_load(LoadOutcome::Loaded(student()));
        state.begin_edit();
        assert_eq!(state.mode, ViewMode::Editing);

        state.draft.email = "scratch@example.edu".to_string();
        state.draft.password = "secret123".to_string();
        state.cancel_edit();

        assert_eq!(state.mode, ViewMode::Viewing);
        assert_eq!(state.draft.email, "jane@example.edu");
        assert!(state.draft.password.is_empty());
    }

    #[tokio::test]
    async fn sign_in_validates_locally_then_stores_token() {
        let api = FakeApi {
            auth: Some(Ok(TokenResponse {
                token: "fresh".to_string(),
            })),
            ..Default::default()
        };
        let session = MemorySession::new();
        let cancel = CancelFlag::new();

        let outcome = sign_in(&api, &session, "", "pw", &cancel).await.unwrap();
        assert!(matches!(outcome, AuthOutcome::Invalid { .. }));
        assert!(api.calls().is_empty());

        let outcome = sign_in(&api, &session, "jane@example.edu", "pw", &cancel)
            .await
            .unwrap();
        assert_eq!(outcome, AuthOutcome::SignedIn);
        assert_eq!(session.token(), Some("fresh".to_string()));
    }

    #[tokio::test]
    async fn sign_in_with_bad_credentials_does_not_store_a_token() {
        let api = FakeApi {
            auth: Some(Err(ApiError::Unauthorized)),
            ..Default::default()
        };
        let session = MemorySession::new();
        let cancel = CancelFlag::new();

        let outcome = sign_in(&api, &session, "jane@example.edu", "wrong", &cancel)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            AuthOutcome::Invalid {
                message: "Invalid email or password".to_string()
            }
        );
        assert_eq!(session.token(), None);
    }

    #[tokio::test]
    async fn sign_up_validates_the_draft_in_order() {
        let api = FakeApi::default();
        let session = MemorySession::new();
        let cancel = CancelFlag::new();

        let request = RegisterRequest {
            name: String::new(),
            email: "jane@example.edu".to_string(),
            password: "secret123".to_string(),
        };
        let outcome = sign_up(&api, &session, &request, "secret123", &cancel)
            .await
            .unwrap();
        assert!(matches!(outcome, AuthOutcome::Invalid { .. }));

        let request = RegisterRequest {
            name: "Jane".to_string(),
            email: "not-an-email".to_string(),
            password: "secret123".to_string(),
        };
        let outcome = sign_up(&api, &session, &request, "secret123", &cancel)
            .await
            .unwrap();
        assert!(matches!(outcome, AuthOutcome::Invalid { .. }));

        let request = RegisterRequest {
            name: "Jane".to_string(),
            email: "jane@example.edu".to_string(),
            password: "short".to_string(),
        };
        let outcome = sign_up(&api, &session, &request, "short", &cancel)
            .await
            .unwrap();
        assert!(matches!(outcome, AuthOutcome::Invalid { .. }));

        let request = RegisterRequest {
            name: "Jane".to_string(),
            email: "jane@example.edu".to_string(),
            password: "secret123".to_string(),
        };
        let outcome = sign_up(&api, &session, &request, "different", &cancel)
            .await
            .unwrap();
        assert!(matches!(outcome, AuthOutcome::Invalid { .. }));

        // Nothing above should have reached the network.
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn sign_up_stores_token_on_success() {
        let api = FakeApi {
            auth: Some(Ok(TokenResponse {
                token: "fresh".to_string(),
            })),
            ..Default::default()
        };
        let session = MemorySession::new();
        let cancel = CancelFlag::new();

        let request = RegisterRequest {
            name: "Jane".to_string(),
            email: "Jane@Example.edu".to_string(),
            password: "secret123".to_string(),
        };
        let outcome = sign_up(&api, &session, &request, "secret123", &cancel)
            .await
            .unwrap();

        assert_eq!(outcome, AuthOutcome::SignedIn);
        assert_eq!(api.calls(), vec!["register"]);
        assert_eq!(session.token(), Some("fresh".to_string()));
    }
}
