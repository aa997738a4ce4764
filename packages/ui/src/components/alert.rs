use dioxus::prelude::*;

/// Supported alert styles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AlertKind {
    Error,
    Success,
}

/// Banner for the single visible error (or success) string. Every failure
/// path replaces the previous message; there is no stacking.
#[component]
pub fn Alert(#[props(default = AlertKind::Error)] kind: AlertKind, message: String) -> Element {
    let class = match kind {
        AlertKind::Error => "alert alert-error",
        AlertKind::Success => "alert alert-success",
    };

    rsx! {
        div {
            class: "{class}",
            role: "alert",
            "{message}"
        }
    }
}
