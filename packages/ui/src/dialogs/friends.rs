use dioxus::prelude::*;

use crate::context::use_api;
use crate::dialogs::field::{form_field, InputKind};
use crate::loading::{use_busy, BusyGuard};
use crate::modal::{close_modal, use_modal};
use crate::notifications::{
    describe_failure, fixed_failure, notify_error, notify_success, use_notifications,
};
use crate::refresh::{reload_friends, use_revisions};
use crate::validation::{AddFriendForm, Field, FieldErrors, Form};
use crate::views::ModalOverlay;

#[component]
pub fn AddFriendDialog() -> Element {
    let mut modal = use_modal();
    let mut notices = use_notifications();
    let mut revisions = use_revisions();
    let busy = use_busy();
    let api = use_api();

    let form = use_signal(AddFriendForm::default);
    let mut errors = use_signal(FieldErrors::default);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let found = form.read().validate();
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }
        let identifier = form.read().identifier.clone();
        let api = api.clone();
        spawn(async move {
            let _busy = BusyGuard::new(busy);
            match api.add_friend(&identifier).await {
                Ok(friend) => {
                    tracing::info!("Added friend {}", friend.friend_id);
                    close_modal(&mut modal);
                    notify_success(&mut notices, "Friend added successfully!");
                    reload_friends(&mut revisions);
                }
                Err(e) => notify_error(&mut notices, describe_failure(&e, "Failed to add friend")),
            }
        });
    };

    rsx! {
        ModalOverlay {
            id: "addFriendModal",
            title: "Add Friend",
            form {
                id: "addFriendForm",
                novalidate: true,
                onsubmit,
                {form_field(form, errors, Field::FriendIdentifier, "Friend's Email or Phone", InputKind::Text)}
                button { r#type: "submit", class: "btn btn-primary", "Add Friend" }
            }
        }
    }
}

/// Confirmation before a friend is removed.
#[component]
pub fn RemoveFriendDialog(friend_id: String, friend_name: String) -> Element {
    let mut modal = use_modal();
    let mut notices = use_notifications();
    let mut revisions = use_revisions();
    let busy = use_busy();
    let api = use_api();

    let onconfirm = move |_| {
        let api = api.clone();
        let friend_id = friend_id.clone();
        spawn(async move {
            let _busy = BusyGuard::new(busy);
            let outcome = api.remove_friend(&friend_id).await;
            close_modal(&mut modal);
            match outcome {
                Ok(()) => {
                    notify_success(&mut notices, "Friend removed successfully!");
                    reload_friends(&mut revisions);
                }
                Err(e) => {
                    notify_error(&mut notices, fixed_failure(&e, "Failed to remove friend"))
                }
            }
        });
    };

    rsx! {
        ModalOverlay {
            id: "removeFriendModal",
            title: "Remove Friend",
            p { "Are you sure you want to remove this friend?" }
            p { class: "confirm-subject", "{friend_name}" }
            div {
                class: "modal-actions",
                button {
                    class: "btn btn-outline",
                    onclick: move |_| close_modal(&mut modal),
                    "Cancel"
                }
                button { class: "btn btn-danger", onclick: onconfirm, "Remove" }
            }
        }
    }
}
