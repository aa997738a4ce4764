//! Registration page view with name/email/password form.

use api::flow::{self, AuthOutcome, CancelFlag, Redirect};
use api::RegisterRequest;
use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, Button, ButtonVariant, Input};
use crate::{use_api, use_session};

/// Register page component.
#[component]
pub fn RegisterView(on_redirect: EventHandler<Redirect>) -> Element {
    let api = use_api();
    let session = use_session();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
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

    let handle_register = {
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

                let request = RegisterRequest {
                    name: name(),
                    email: email(),
                    password: password(),
                };
                match flow::sign_up(&api, &session, &request, &confirm_password(), &cancel).await {
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

            h1 { class: "auth-title", "Create Account" }

            p { class: "auth-subtitle", "Sign up for StudyPort" }

            form {
                onsubmit: handle_register,
                class: "form auth-form",

                if let Some(message) = error() {
                    Alert { kind: AlertKind::Error, message }
                }

                Input {
                    r#type: "text",
                    placeholder: "Name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }

                Input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                Input {
                    r#type: "password",
                    placeholder: "Password (min 8 characters)",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "auth-footer",
                "Already have an account? "
                a { href: "/login", "Sign in" }
            }
        }
    }
}
