//! # API crate — REST client for the StudyPort backend
//!
//! Everything the frontends need to talk to the portal API and keep the
//! displayed profile consistent with the server and with the stored session
//! token.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Wire types: [`Profile`], [`ProfileDraft`], auth request/response bodies |
//! | [`error`] | [`ApiError`] taxonomy: auth failures vs everything else |
//! | [`config`] | [`ApiConfig`] — base URL with build-time override |
//! | [`client`] | [`StudentApi`] trait and its `reqwest`-backed [`HttpApi`] |
//! | [`flow`] | Session guard + profile sync: page state, outcomes, cancellation |
//!
//! The [`client::StudentApi`] trait exists so the flow functions can be
//! exercised against a recording double; views always use [`HttpApi`].

pub mod client;
pub mod config;
pub mod error;
pub mod flow;
pub mod models;

pub use client::{HttpApi, StudentApi};
pub use config::ApiConfig;
pub use error::ApiError;
pub use flow::{CancelFlag, PageState, Redirect, ViewMode};
pub use models::{Profile, ProfileDraft, RegisterRequest, TokenResponse};
