//! Authenticated landing page.

use api::flow::Redirect;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::icons::FaUser;
use crate::{use_session, Icon};

#[component]
pub fn HomeView(on_redirect: EventHandler<Redirect>) -> Element {
    let session = use_session();

    if !session.is_authenticated() {
        on_redirect.call(Redirect::Login);
    }

    rsx! {
        document::Link { rel: "stylesheet", href: crate::STUDYPORT_CSS }
        div {
            class: "page",

            div {
                class: "card",

                div {
                    class: "card-header",
                    h2 { "StudyPort" }
                }

                div {
                    class: "card-body",
                    p { "Welcome back." }
                    div {
                        class: "actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| on_redirect.call(Redirect::Profile),
                            Icon { icon: FaUser, width: 14, height: 14 }
                            "Open profile"
                        }
                    }
                }
            }
        }
    }
}
