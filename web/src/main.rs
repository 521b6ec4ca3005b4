use dioxus::prelude::*;
use ui::{LoginPage, SignupPage};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/signup")]
    Signup {},
}

#[component]
fn Home() -> Element {
    rsx! {
        LoginPage {}
    }
}

#[component]
fn Signup() -> Element {
    rsx! {
        SignupPage {}
    }
}
