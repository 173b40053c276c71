use api::settle_up_suggestions;
use dioxus::prelude::*;

use crate::context::use_api;
use crate::dialogs::group::use_friend_options;
use crate::format::money;
use crate::modal::{close_modal, use_modal};
use crate::notifications::{fixed_failure, notify_error, use_notifications};
use crate::views::ModalOverlay;

/// Totals computed by the server.
#[component]
pub fn BalancesDialog() -> Element {
    let mut notices = use_notifications();
    let api = use_api();

    let summary = use_resource(move || {
        let api = api.clone();
        async move {
            match api.balances().await {
                Ok(summary) => Some(summary),
                Err(e) => {
                    notify_error(&mut notices, fixed_failure(&e, "Failed to load balances"));
                    None
                }
            }
        }
    });

    let body = match summary.read().as_ref().cloned() {
        None => rsx! { p { class: "muted", "Loading balances..." } },
        Some(None) => rsx! { p { class: "empty-state", "Balances are unavailable right now." } },
        Some(Some(summary)) => {
            let net_class = if summary.net_balance >= 0.0 { "positive" } else { "negative" };
            rsx! {
                dl {
                    class: "balance-summary",
                    div {
                        dt { "You are owed" }
                        dd { class: "positive", "{money(summary.total_owed_to_you)}" }
                    }
                    div {
                        dt { "You owe" }
                        dd { class: "negative", "{money(summary.total_owed)}" }
                    }
                    div {
                        dt { "Net balance" }
                        dd { class: net_class, "{money(summary.net_balance)}" }
                    }
                }
            }
        }
    };

    rsx! {
        ModalOverlay {
            id: "balancesModal",
            title: "Balances",
            {body}
        }
    }
}

/// Who should pay whom, one line per unsettled friend.
#[component]
pub fn SettleUpDialog() -> Element {
    let mut modal = use_modal();
    let friends = use_friend_options();

    let body = match friends.read().as_ref() {
        None => rsx! { p { class: "muted", "Loading balances..." } },
        Some(list) => {
            let suggestions = settle_up_suggestions(list);
            if suggestions.is_empty() {
                rsx! { p { class: "empty-state", "You're all settled up!" } }
            } else {
                rsx! {
                    ul {
                        class: "settle-list",
                        for suggestion in suggestions {
                            li {
                                key: "{suggestion.friend_id}",
                                "{suggestion.describe()}"
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        ModalOverlay {
            id: "settleUpModal",
            title: "Settle Up",
            {body}
            div {
                class: "modal-actions",
                button {
                    class: "btn btn-outline",
                    onclick: move |_| close_modal(&mut modal),
                    "Close"
                }
            }
        }
    }
}
