//! Profile page: session-guarded load, inline editing, logout, and account
//! deletion.

use api::flow::{self, CancelFlag, PageState, Redirect, ViewMode};
use api::Profile;
use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, Button, ButtonVariant, Input, Label, Spinner};
use crate::icons::{FaHouse, FaPenToSquare, FaRightFromBracket, FaTrash};
use crate::{use_api, use_session, Icon};

/// The profile page. Redirect requests (auth failures, logout, the Home
/// button) are delegated to the platform shell via `on_redirect`.
#[component]
pub fn ProfileView(on_redirect: EventHandler<Redirect>) -> Element {
    let api = use_api();
    let session = use_session();
    let mut state = use_signal(PageState::new);
    let mut saving = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    // Cancelled on unmount so a late response cannot touch the signals of a
    // dead view.
    let cancel = use_hook(CancelFlag::new);
    use_drop({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    // Session guard + initial fetch.
    let _loader = use_resource({
        let api = api.clone();
        let session = session.clone();
        let cancel = cancel.clone();
        move || {
            let api = api.clone();
            let session = session.clone();
            let cancel = cancel.clone();
            async move {
                if let Some(outcome) = flow::load_profile(&api, &session, &cancel).await {
                    if let Some(target) = state.write().apply_load(outcome) {
                        on_redirect.call(target);
                    }
                }
            }
        }
    });

    let handle_save = {
        let api = api.clone();
        let session = session.clone();
        let cancel = cancel.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let api = api.clone();
            let session = session.clone();
            let cancel = cancel.clone();
            spawn(async move {
                saving.set(true);
                let draft = state.read().draft.clone();
                if let Some(outcome) = flow::save_profile(&api, &session, &draft, &cancel).await {
                    saving.set(false);
                    if let Some(target) = state.write().apply_save(outcome) {
                        on_redirect.call(target);
                    }
                }
            });
        }
    };

    let handle_delete = {
        let api = api.clone();
        let session = session.clone();
        let cancel = cancel.clone();
        move |_| {
            let api = api.clone();
            let session = session.clone();
            let cancel = cancel.clone();
            spawn(async move {
                deleting.set(true);
                if let Some(outcome) = flow::delete_account(&api, &session, &cancel).await {
                    deleting.set(false);
                    if let Some(target) = state.write().apply_delete(outcome) {
                        on_redirect.call(target);
                    }
                }
            });
        }
    };

    let handle_logout = {
        let session = session.clone();
        move |_| {
            on_redirect.call(flow::logout(&session));
        }
    };

    let page = state();

    rsx! {
        document::Link { rel: "stylesheet", href: crate::STUDYPORT_CSS }
        div {
            class: "page",

            div {
                class: "card",

                div {
                    class: "card-header",
                    h2 { "Profile" }
                }

                div {
                    class: "card-body",

                    if let Some(message) = page.error.clone() {
                        Alert { kind: AlertKind::Error, message }
                    }

                    if let Some(profile) = page.profile.clone() {
                        if page.mode == ViewMode::Editing {
                            form {
                                onsubmit: handle_save,
                                class: "form",

                                div {
                                    class: "field",
                                    Label { html_for: "email", "Email" }
                                    Input {
                                        id: "email",
                                        r#type: "email",
                                        value: page.draft.email.clone(),
                                        oninput: move |evt: FormEvent| {
                                            state.write().draft.email = evt.value();
                                        },
                                    }
                                }

                                div {
                                    class: "field",
                                    Label { html_for: "password", "Password" }
                                    Input {
                                        id: "password",
                                        r#type: "password",
                                        placeholder: "Required to save changes",
                                        value: page.draft.password.clone(),
                                        oninput: move |evt: FormEvent| {
                                            state.write().draft.password = evt.value();
                                        },
                                    }
                                }

                                div {
                                    class: "actions",
                                    Button {
                                        variant: ButtonVariant::Primary,
                                        r#type: "submit",
                                        disabled: saving(),
                                        if saving() { "Saving..." } else { "Save" }
                                    }
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        onclick: move |_| state.write().cancel_edit(),
                                        "Cancel"
                                    }
                                }
                            }
                        } else {
                            ProfileDetails { profile }
                            div {
                                class: "actions",
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| state.write().begin_edit(),
                                    Icon { icon: FaPenToSquare, width: 14, height: 14 }
                                    "Edit profile"
                                }
                            }
                        }
                    } else {
                        Spinner {}
                    }

                    div {
                        class: "page-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| on_redirect.call(Redirect::Home),
                            Icon { icon: FaHouse, width: 14, height: 14 }
                            "Home"
                        }
                        Button {
                            variant: ButtonVariant::Danger,
                            onclick: handle_logout,
                            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                            "Logout"
                        }
                        Button {
                            variant: ButtonVariant::Danger,
                            disabled: deleting(),
                            onclick: handle_delete,
                            Icon { icon: FaTrash, width: 14, height: 14 }
                            if deleting() { "Deleting..." } else { "Delete account" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProfileDetails(profile: Profile) -> Element {
    let courses = if profile.courses.is_empty() {
        "No courses enrolled".to_string()
    } else {
        profile.courses.join(", ")
    };

    rsx! {
        div {
            class: "field",
            p { class: "field-label", "Name" }
            p { class: "field-value", "{profile.display_name()}" }
        }

        div {
            class: "field",
            p { class: "field-label", "Email" }
            p { class: "field-value", "{profile.email}" }
        }

        div {
            class: "field",
            p { class: "field-label", "Enrolled Courses" }
            p { class: "field-value", "{courses}" }
        }
    }
}
