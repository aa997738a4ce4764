//! Login page view with email/password form.

use api::flow::{self, AuthOutcome, CancelFlag, Redirect};
use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, Button, ButtonVariant, Input};
use crate::{use_api, use_session};

/// Login page component.
#[component]
pub fn LoginView(on_redirect: EventHandler<Redirect>) -> Element {
    let api = use_api();
    let session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already signed in, skip the form.
    if session.is_authenticated() {
        on_redirect.call(Redirect::Home);
    }

    let cancel = use_hook(CancelFlag::new);
    use_drop({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    let handle_login = {
        let api = api.clone();
        let session = session.clone();
        let cancel = cancel.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let api = api.clone();
            let session = session.clone();
            let cancel = cancel.clone();
            spawn(async move {
                error.set(None);
                loading.set(true);
                match flow::sign_in(&api, &session, &email(), &password(), &cancel).await {
                    Some(AuthOutcome::SignedIn) => {
                        on_redirect.call(Redirect::Home);
                    }
                    Some(AuthOutcome::Invalid { message })
                    | Some(AuthOutcome::Failed { message }) => {
                        loading.set(false);
                        error.set(Some(message));
                    }
                    None => {}
                }
            });
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: crate::STUDYPORT_CSS }
        div {
            class: "page auth-page",

            h1 { class: "auth-title", "StudyPort" }

            p { class: "auth-subtitle", "Sign in to your account" }

            form {
                onsubmit: handle_login,
                class: "form auth-form",

                if let Some(message) = error() {
                    Alert { kind: AlertKind::Error, message }
                }

                Input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                Input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "auth-footer",
                "Don't have an account? "
                a { href: "/register", "Sign up" }
            }
        }
    }
}
