use api::Group;
use dioxus::prelude::*;

use crate::auth::{require_login, use_auth};
use crate::context::use_api;
use crate::format::{expense_count, member_count, money};
use crate::loading::{use_busy, BusyGuard};
use crate::modal::{open_modal, use_modal, ActiveModal};
use crate::notifications::{fixed_failure, notify_error, use_notifications};
use crate::refresh::use_revisions;
use crate::views::SignInPrompt;

#[component]
pub fn GroupsSection() -> Element {
    let auth = use_auth();
    let mut modal = use_modal();
    let revisions = use_revisions();
    let notices = use_notifications();
    let busy = use_busy();
    let api = use_api();

    let groups = use_resource(move || {
        let api = api.clone();
        let signed_in = auth.read().signed_in();
        let _revision = revisions.read().groups;
        let mut notices = notices;
        async move {
            if !signed_in {
                return None;
            }
            let _busy = BusyGuard::new(busy);
            match api.groups().await {
                Ok(list) => Some(list),
                Err(e) => {
                    notify_error(&mut notices, fixed_failure(&e, "Failed to load groups"));
                    Some(Vec::new())
                }
            }
        }
    });

    let list = match groups.read().as_ref().cloned() {
        _ if auth.read().needs_sign_in() => rsx! { SignInPrompt { what: "groups" } },
        None | Some(None) => rsx! {},
        Some(Some(list)) if list.is_empty() => rsx! {
            p {
                class: "empty-state",
                "No groups created yet. Create your first group to start splitting expenses!"
            }
        },
        Some(Some(list)) => rsx! {
            for group in list {
                GroupCard { key: "{group.id}", group }
            }
        },
    };

    rsx! {
        section {
            id: "groups",
            class: "section active",
            div {
                class: "section-header",
                h2 { "Groups" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        if require_login(auth, &mut modal) {
                            open_modal(&mut modal, ActiveModal::CreateGroup);
                        }
                    },
                    "Create Group"
                }
            }
            div { id: "groupsList", class: "card-list", {list} }
        }
    }
}

#[component]
fn GroupCard(group: Group) -> Element {
    let description = group.description_text().unwrap_or("No description").to_string();
    let members = member_count(group.members.len());
    let expenses = expense_count(group.total_expenses);
    let total = money(group.total_amount);

    rsx! {
        div {
            class: "group-card",
            div {
                class: "group-info",
                h3 { "{group.name}" }
                p { "{description}" }
                small { "Created by {group.created_by_name} • {members}" }
            }
            div {
                class: "group-stats",
                span { "{expenses}" }
                span { "{total} total" }
            }
        }
    }
}
