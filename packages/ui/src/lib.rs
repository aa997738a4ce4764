//! This crate contains all shared UI for the StudyPort workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{use_api, use_session, Session, SessionProvider};

pub mod views;

pub const STUDYPORT_CSS: Asset = asset!("/assets/studyport.css");
