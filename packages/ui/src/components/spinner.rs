use dioxus::prelude::*;

/// Loading placeholder shown until a fetch resolves. Stays up indefinitely
/// when the request hangs; there is deliberately no timeout.
#[component]
pub fn Spinner(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "spinner",
            role: "status",
            aria_live: "polite",
            "{label}"
        }
    }
}
