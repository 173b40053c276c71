use dioxus::prelude::*;

use crate::modal::{open_modal, use_modal, ActiveModal, AuthMode};

/// Shown in place of a section's list when nobody is signed in.
#[component]
pub fn SignInPrompt(what: String) -> Element {
    let mut modal = use_modal();

    rsx! {
        div {
            class: "empty-state sign-in-prompt",
            p { "Sign in to see your {what}." }
            button {
                class: "btn btn-primary",
                onclick: move |_| open_modal(&mut modal, ActiveModal::Auth(AuthMode::SignIn)),
                "Sign In"
            }
        }
    }
}
