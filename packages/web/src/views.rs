//! Route components bridging the shared views to the router.

use api::flow::Redirect;
use dioxus::prelude::*;
use ui::views::{HomeView, LoginView, ProfileView, RegisterView};

use crate::Route;

fn route_for(redirect: Redirect) -> Route {
    match redirect {
        Redirect::Login => Route::Login {},
        Redirect::Home => Route::Home {},
        Redirect::Profile => Route::Profile {},
    }
}

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        HomeView {
            on_redirect: move |target| {
                nav.replace(route_for(target));
            },
        }
    }
}

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        LoginView {
            on_redirect: move |target| {
                nav.replace(route_for(target));
            },
        }
    }
}

#[component]
pub fn Register() -> Element {
    let nav = use_navigator();

    rsx! {
        RegisterView {
            on_redirect: move |target| {
                nav.replace(route_for(target));
            },
        }
    }
}

#[component]
pub fn Profile() -> Element {
    let nav = use_navigator();

    rsx! {
        ProfileView {
            on_redirect: move |target| {
                nav.replace(route_for(target));
            },
        }
    }
}
