use api::Friend;
use dioxus::prelude::*;

use crate::auth::{require_login, use_auth};
use crate::context::use_api;
use crate::format::{balance_label, money};
use crate::loading::{use_busy, BusyGuard};
use crate::modal::{open_modal, use_modal, ActiveModal};
use crate::notifications::{fixed_failure, notify_error, use_notifications};
use crate::refresh::use_revisions;
use crate::views::SignInPrompt;

/// The Friends section: every friend with their running balance.
#[component]
pub fn FriendsSection() -> Element {
    let auth = use_auth();
    let mut modal = use_modal();
    let revisions = use_revisions();
    let notices = use_notifications();
    let busy = use_busy();
    let api = use_api();

    let friends = use_resource(move || {
        let api = api.clone();
        let signed_in = auth.read().signed_in();
        let _revision = revisions.read().friends;
        let mut notices = notices;
        async move {
            if !signed_in {
                return None;
            }
            let _busy = BusyGuard::new(busy);
            match api.friends().await {
                Ok(list) => Some(list),
                Err(e) => {
                    notify_error(&mut notices, fixed_failure(&e, "Failed to load friends"));
                    Some(Vec::new())
                }
            }
        }
    });

    let list = match friends.read().as_ref().cloned() {
        _ if auth.read().needs_sign_in() => rsx! { SignInPrompt { what: "friends" } },
        None | Some(None) => rsx! {},
        Some(Some(list)) if list.is_empty() => rsx! {
            p { class: "empty-state", "No friends added yet. Add your first friend to get started!" }
        },
        Some(Some(list)) => rsx! {
            for friend in list {
                FriendCard { key: "{friend.friend_id}", friend }
            }
        },
    };

    rsx! {
        section {
            id: "friends",
            class: "section active",
            div {
                class: "section-header",
                h2 { "Friends" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        if require_login(auth, &mut modal) {
                            open_modal(&mut modal, ActiveModal::AddFriend);
                        }
                    },
                    "Add Friend"
                }
            }
            div { id: "friendsList", class: "card-list", {list} }
        }
    }
}

#[component]
fn FriendCard(friend: Friend) -> Element {
    let mut modal = use_modal();
    let (label, class) = balance_label(&friend);
    let amount = money(friend.balance.abs());
    let email = friend.friend_email.clone().unwrap_or_default();
    let friend_id = friend.friend_id.clone();
    let friend_name = friend.friend_name.clone();

    rsx! {
        div {
            class: "friend-card",
            div {
                class: "friend-info",
                h3 { "{friend.friend_name}" }
                p { "{email}" }
            }
            div { class: "friend-balance {class}", "{label} {amount}" }
            button {
                class: "btn btn-outline",
                onclick: move |_| {
                    open_modal(
                        &mut modal,
                        ActiveModal::RemoveFriend {
                            friend_id: friend_id.clone(),
                            friend_name: friend_name.clone(),
                        },
                    )
                },
                "Remove"
            }
        }
    }
}
