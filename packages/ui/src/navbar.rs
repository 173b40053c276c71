use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutLink};
use crate::modal::{open_modal, use_modal, ActiveModal, AuthMode};

/// Top navigation bar. `children` are the section links; the bar adds the
/// brand, the mobile menu toggle and the account controls.
#[component]
pub fn Navbar(children: Element) -> Element {
    let auth = use_auth();
    let mut modal = use_modal();
    let mut menu_open = use_signal(|| false);
    let mut dropdown_open = use_signal(|| false);

    let state = auth();
    let menu_class = if menu_open() { "nav-menu active" } else { "nav-menu" };

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "nav-container",
                Link { class: "nav-brand", to: "/", "SplitPro" }
                button {
                    id: "navToggle",
                    class: "nav-toggle",
                    "aria-label": "Toggle navigation",
                    onclick: move |_| menu_open.toggle(),
                    span { class: "bar" }
                    span { class: "bar" }
                    span { class: "bar" }
                }
                div {
                    id: "navMenu",
                    class: menu_class,
                    onclick: move |_| menu_open.set(false),
                    {children}
                }
                if state.loading {
                    div { class: "nav-auth" }
                } else if let Some(user) = state.user {
                    div {
                        id: "userDropdown",
                        class: "user-dropdown",
                        button {
                            id: "userInitials",
                            class: "user-initials",
                            title: "{user.display_name()}",
                            onclick: move |_| dropdown_open.toggle(),
                            "{user.initials()}"
                        }
                        if dropdown_open() {
                            div {
                                class: "dropdown-menu",
                                onclick: move |_| dropdown_open.set(false),
                                div { class: "dropdown-name", "{user.display_name()}" }
                                LogoutLink { class: "dropdown-item" }
                            }
                        }
                    }
                } else {
                    div {
                        id: "authButtons",
                        class: "nav-auth",
                        button {
                            id: "loginBtn",
                            class: "btn btn-outline",
                            onclick: move |_| open_modal(&mut modal, ActiveModal::Auth(AuthMode::SignIn)),
                            "Sign In"
                        }
                        button {
                            id: "signupBtn",
                            class: "btn btn-primary",
                            onclick: move |_| open_modal(&mut modal, ActiveModal::Auth(AuthMode::SignUp)),
                            "Sign Up"
                        }
                    }
                }
            }
        }
    }
}
