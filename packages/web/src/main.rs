use dioxus::prelude::*;
use views::{Home, Login, Profile, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/home")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/profile")]
    Profile {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::STUDYPORT_CSS }
        ui::SessionProvider {
            Router::<Route> {}
        }
    }
}

#[component]
fn Root() -> Element {
    let session = ui::use_session();
    let nav = use_navigator();

    // Redirect based on session state
    if session.is_authenticated() {
        nav.replace(Route::Home {});
    } else {
        nav.replace(Route::Login {});
    }

    rsx! {}
}
