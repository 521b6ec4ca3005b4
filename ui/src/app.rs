//! Page shells for the two auth screens.

use dioxus::prelude::*;

use crate::components::forms::{LoginForm, SignupForm};

#[component]
pub fn LoginPage() -> Element {
    rsx! {
        AuthScreen {
            glyph: "🔓",
            title: "Access Portal",
            subtitle: "Authenticate with your username & PIN",
            LoginForm {}
        }
    }
}

#[component]
pub fn SignupPage() -> Element {
    rsx! {
        AuthScreen {
            glyph: "📝",
            title: "Create Account",
            subtitle: "Fill in your details to register",
            SignupForm {}
        }
    }
}

/// Split layout shared by both screens: form card on the left, gradient
/// panel on the right.
#[component]
fn AuthScreen(
    glyph: &'static str,
    title: &'static str,
    subtitle: &'static str,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "auth-screen",
            div {
                class: "auth-pane",
                div {
                    class: "auth-card",
                    div {
                        class: "auth-glyph",
                        "{glyph}"
                    }
                    h1 {
                        class: "auth-title",
                        "{title}"
                    }
                    p {
                        class: "auth-subtitle",
                        "{subtitle}"
                    }
                    {children}
                }
            }
            div { class: "gradient-pane" }
        }
    }
}
