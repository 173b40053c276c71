//! The single modal slot.
//!
//! At most one dialog is open at a time. While one is open the page body does
//! not scroll.

use dioxus::prelude::*;

use crate::dialogs::{
    AddFriendDialog, AuthDialog, BalancesDialog, CreateGroupDialog, ForgotPasswordDialog,
    QuickExpenseDialog, RemoveFriendDialog, SettleUpDialog, SupportDialog,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ActiveModal {
    Auth(AuthMode),
    ForgotPassword,
    Support,
    AddFriend,
    RemoveFriend { friend_id: String, friend_name: String },
    CreateGroup,
    QuickExpense,
    Balances,
    SettleUp,
}

pub fn use_modal() -> Signal<Option<ActiveModal>> {
    use_context::<Signal<Option<ActiveModal>>>()
}

pub fn open_modal(modal: &mut Signal<Option<ActiveModal>>, which: ActiveModal) {
    modal.set(Some(which));
}

pub fn close_modal(modal: &mut Signal<Option<ActiveModal>>) {
    modal.set(None);
}

#[cfg(target_arch = "wasm32")]
fn lock_page_scroll(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if result.is_err() {
        tracing::warn!("Could not update page scroll lock");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn lock_page_scroll(_locked: bool) {}

/// Renders whichever dialog is open.
#[component]
pub fn ModalHost() -> Element {
    let modal = use_modal();

    use_effect(move || {
        lock_page_scroll(modal.read().is_some());
    });

    let Some(active) = modal() else {
        return rsx! {};
    };

    match active {
        ActiveModal::Auth(mode) => rsx! { AuthDialog { mode } },
        ActiveModal::ForgotPassword => rsx! { ForgotPasswordDialog {} },
        ActiveModal::Support => rsx! { SupportDialog {} },
        ActiveModal::AddFriend => rsx! { AddFriendDialog {} },
        ActiveModal::RemoveFriend {
            friend_id,
            friend_name,
        } => rsx! { RemoveFriendDialog { friend_id, friend_name } },
        ActiveModal::CreateGroup => rsx! { CreateGroupDialog {} },
        ActiveModal::QuickExpense => rsx! { QuickExpenseDialog {} },
        ActiveModal::Balances => rsx! { BalancesDialog {} },
        ActiveModal::SettleUp => rsx! { SettleUpDialog {} },
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    thread_local! {
        static SLOTS: RefCell<Vec<Option<ActiveModal>>> = const { RefCell::new(Vec::new()) };
    }

    fn record(modal: Signal<Option<ActiveModal>>) {
        let current = modal.peek().clone();
        SLOTS.with(|s| s.borrow_mut().push(current));
    }

    fn switching_dialogs() -> Element {
        let mut modal = use_signal(|| None::<ActiveModal>);
        use_hook(move || {
            open_modal(&mut modal, ActiveModal::Auth(AuthMode::SignIn));
            record(modal);
            open_modal(&mut modal, ActiveModal::ForgotPassword);
            record(modal);
            open_modal(
                &mut modal,
                ActiveModal::RemoveFriend {
                    friend_id: "u2".to_string(),
                    friend_name: "Bob".to_string(),
                },
            );
            record(modal);
            close_modal(&mut modal);
            record(modal);
        });
        rsx! {}
    }

    #[test]
    fn test_opening_a_dialog_replaces_the_open_one() {
        SLOTS.with(|s| s.borrow_mut().clear());
        let mut dom = VirtualDom::new(switching_dialogs);
        dom.rebuild_in_place();
        let slots = SLOTS.with(|s| s.borrow().clone());
        assert_eq!(
            slots,
            [
                Some(ActiveModal::Auth(AuthMode::SignIn)),
                Some(ActiveModal::ForgotPassword),
                Some(ActiveModal::RemoveFriend {
                    friend_id: "u2".to_string(),
                    friend_name: "Bob".to_string(),
                }),
                None,
            ]
        );
    }
}
