use dioxus::prelude::*;

use crate::auth::{require_login, use_auth};
use crate::context::{use_api, use_config};
use crate::export::{download_csv, expenses_csv, EXPORT_FILENAME};
use crate::loading::{use_busy, BusyGuard};
use crate::modal::{open_modal, use_modal, ActiveModal, AuthMode};
use crate::notifications::{
    describe_failure, notify_error, notify_info, notify_success, use_notifications,
};

/// Landing section with the quick actions.
#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let mut modal = use_modal();
    let mut notices = use_notifications();
    let busy = use_busy();
    let api = use_api();
    let export_size = use_config().api.export_page_size;
    let nav = use_navigator();

    let mut guarded = move |which: ActiveModal| {
        if require_login(auth, &mut modal) {
            open_modal(&mut modal, which);
        }
    };

    let export = use_callback(move |_: ()| {
        if !require_login(auth, &mut modal) {
            return;
        }
        let api = api.clone();
        spawn(async move {
            let _busy = BusyGuard::new(busy);
            let page = match api.expenses(0, export_size).await {
                Ok(page) => page,
                Err(e) => {
                    notify_error(&mut notices, describe_failure(&e, "Failed to export expenses"));
                    return;
                }
            };
            if page.is_empty() {
                notify_info(&mut notices, "No expenses to export yet.");
                return;
            }
            let written = expenses_csv(&page.content)
                .map_err(|e| e.to_string())
                .and_then(|csv| download_csv(EXPORT_FILENAME, &csv));
            match written {
                Ok(()) => notify_success(
                    &mut notices,
                    format!("Exported {} expenses", page.content.len()),
                ),
                Err(e) => {
                    tracing::error!("CSV export failed: {e}");
                    notify_error(&mut notices, "Failed to export expenses");
                }
            }
        });
    });

    let signed_in = auth.read().signed_in();
    let greeting = auth
        .read()
        .user
        .as_ref()
        .map(|u| format!("Welcome back, {}!", u.display_name()));

    rsx! {
        section {
            id: "home",
            class: "section active",
            div {
                class: "hero",
                h1 { "Split expenses, not friendships" }
                if let Some(greeting) = greeting {
                    p { class: "hero-greeting", "{greeting}" }
                } else {
                    p { "Track shared bills with friends and groups, and always know who owes what." }
                }
                if !signed_in {
                    div {
                        class: "hero-actions",
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| open_modal(&mut modal, ActiveModal::Auth(AuthMode::SignUp)),
                            "Get Started"
                        }
                        button {
                            class: "btn btn-outline",
                            onclick: move |_| open_modal(&mut modal, ActiveModal::Auth(AuthMode::SignIn)),
                            "Sign In"
                        }
                    }
                }
            }

            div {
                class: "quick-actions",
                div {
                    class: "action-group",
                    h3 { "Expenses" }
                    button { id: "quickExpenseBtn", class: "action-btn", onclick: move |_| guarded(ActiveModal::QuickExpense), "Add Expense" }
                    button { id: "settleUpBtn", class: "action-btn", onclick: move |_| guarded(ActiveModal::SettleUp), "Settle Up" }
                    button { id: "balancesBtn", class: "action-btn", onclick: move |_| guarded(ActiveModal::Balances), "View Balances" }
                    button { id: "exportBtn", class: "action-btn", onclick: move |_| export.call(()), "Export" }
                }
                div {
                    class: "action-group",
                    h3 { "Friends" }
                    button { id: "addFriendBtn", class: "action-btn", onclick: move |_| guarded(ActiveModal::AddFriend), "Add Friend" }
                    button {
                        id: "manageFriendsBtn",
                        class: "action-btn",
                        onclick: move |_| {
                            nav.push("/friends");
                        },
                        "Manage Friends"
                    }
                }
                div {
                    class: "action-group",
                    h3 { "Groups" }
                    button { id: "createGroupBtn", class: "action-btn", onclick: move |_| guarded(ActiveModal::CreateGroup), "Create Group" }
                    button {
                        id: "manageGroupsBtn",
                        class: "action-btn",
                        onclick: move |_| {
                            nav.push("/groups");
                        },
                        "Manage Groups"
                    }
                }
                div {
                    class: "action-group",
                    h3 { "Data" }
                    button {
                        id: "importCsvBtn",
                        class: "action-btn",
                        onclick: move |_| {
                            if require_login(auth, &mut modal) {
                                notify_info(&mut notices, "CSV import feature coming soon!");
                            }
                        },
                        "Import CSV"
                    }
                    button { id: "exportCsvBtn", class: "action-btn", onclick: move |_| export.call(()), "Export CSV" }
                }
            }
        }
    }
}
