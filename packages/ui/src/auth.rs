//! Authentication context and hooks for the UI.

use api::UserInfo;
use dioxus::prelude::*;

use crate::context::use_api;
use crate::loading::{use_busy, BusyGuard};
use crate::modal::{open_modal, ActiveModal, AuthMode};
use crate::notifications::{fixed_failure, notify_error, notify_success, use_notifications};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Logged out, and the session check has finished.
    pub fn needs_sign_in(&self) -> bool {
        !self.loading && self.user.is_none()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that resolves the session on mount.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);
    let api = use_api();

    let _ = use_resource(move || {
        let api = api.clone();
        async move {
            match api.current_user().await {
                Ok(user) => {
                    if let Some(user) = &user {
                        tracing::info!("Session restored for {}", user.id);
                    }
                    auth_state.set(AuthState {
                        user,
                        loading: false,
                    });
                }
                Err(e) => {
                    tracing::error!(status = ?e.status(), "Auth check failed: {e}");
                    auth_state.set(AuthState {
                        user: None,
                        loading: false,
                    });
                }
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Opens the sign-in dialog and returns false when nobody is signed in.
pub fn require_login(auth: Signal<AuthState>, modal: &mut Signal<Option<ActiveModal>>) -> bool {
    if auth.peek().signed_in() {
        return true;
    }
    open_modal(modal, ActiveModal::Auth(AuthMode::SignIn));
    false
}

/// "Sign Out" entry of the user menu.
#[component]
pub fn LogoutLink(
    #[props(default = "Sign Out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();
    let mut notices = use_notifications();
    let busy = use_busy();
    let api = use_api();
    let nav = use_navigator();

    let onclick = move |evt: MouseEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            let _busy = BusyGuard::new(busy);
            match api.logout().await {
                Ok(()) => {
                    auth_state.set(AuthState {
                        user: None,
                        loading: false,
                    });
                    nav.push("/");
                    notify_success(&mut notices, "Successfully signed out!");
                }
                Err(e) => notify_error(&mut notices, fixed_failure(&e, "Logout failed")),
            }
        }
    };

    rsx! {
        a {
            id: "logoutLink",
            class: "{class}",
            href: "#",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    thread_local! {
        static OUTCOMES: RefCell<Vec<(bool, Option<ActiveModal>)>> = const { RefCell::new(Vec::new()) };
    }

    fn gated_actions() -> Element {
        let mut auth = use_signal(|| AuthState {
            user: None,
            loading: false,
        });
        let mut modal = use_signal(|| None::<ActiveModal>);
        use_hook(move || {
            let allowed = require_login(auth, &mut modal);
            OUTCOMES.with(|o| o.borrow_mut().push((allowed, modal.peek().clone())));

            modal.set(None);
            auth.set(AuthState {
                user: Some(UserInfo {
                    id: "u1".to_string(),
                    name: "Ada Lovelace".to_string(),
                    ..Default::default()
                }),
                loading: false,
            });
            let allowed = require_login(auth, &mut modal);
            OUTCOMES.with(|o| o.borrow_mut().push((allowed, modal.peek().clone())));
        });
        rsx! {}
    }

    #[test]
    fn test_require_login_opens_sign_in_when_logged_out() {
        OUTCOMES.with(|o| o.borrow_mut().clear());
        let mut dom = VirtualDom::new(gated_actions);
        dom.rebuild_in_place();
        let outcomes = OUTCOMES.with(|o| o.borrow().clone());
        assert_eq!(
            outcomes,
            [
                (false, Some(ActiveModal::Auth(AuthMode::SignIn))),
                (true, None),
            ]
        );
    }

    #[test]
    fn test_needs_sign_in_waits_for_session_check() {
        let checking = AuthState::default();
        assert!(checking.loading);
        assert!(!checking.needs_sign_in());

        let logged_out = AuthState {
            user: None,
            loading: false,
        };
        assert!(logged_out.needs_sign_in());

        let logged_in = AuthState {
            user: Some(UserInfo::default()),
            loading: false,
        };
        assert!(!logged_in.needs_sign_in());
        assert!(logged_in.signed_in());
    }
}
