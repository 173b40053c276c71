use api::Expense;
use dioxus::prelude::*;

use crate::auth::{require_login, use_auth};
use crate::context::{use_api, use_config};
use crate::format::{money, short_date_or_blank};
use crate::loading::{use_busy, BusyGuard};
use crate::modal::{open_modal, use_modal, ActiveModal};
use crate::notifications::{fixed_failure, notify_error, use_notifications};
use crate::refresh::use_revisions;
use crate::views::SignInPrompt;

/// The most recent page of expenses involving the user.
#[component]
pub fn HistorySection() -> Element {
    let auth = use_auth();
    let mut modal = use_modal();
    let revisions = use_revisions();
    let notices = use_notifications();
    let busy = use_busy();
    let api = use_api();
    let page_size = use_config().api.history_page_size;

    let history = use_resource(move || {
        let api = api.clone();
        let signed_in = auth.read().signed_in();
        let _revision = revisions.read().history;
        let mut notices = notices;
        async move {
            if !signed_in {
                return None;
            }
            let _busy = BusyGuard::new(busy);
            match api.expenses(0, page_size).await {
                Ok(page) => Some(page.content),
                Err(e) => {
                    notify_error(
                        &mut notices,
                        fixed_failure(&e, "Failed to load transaction history"),
                    );
                    Some(Vec::new())
                }
            }
        }
    });

    let list = match history.read().as_ref().cloned() {
        _ if auth.read().needs_sign_in() => rsx! { SignInPrompt { what: "history" } },
        None | Some(None) => rsx! {},
        Some(Some(list)) if list.is_empty() => rsx! {
            p {
                class: "empty-state",
                "No transactions yet. Add an expense to see your history!"
            }
        },
        Some(Some(list)) => rsx! {
            for expense in list {
                HistoryItem { key: "{expense.id}", expense }
            }
        },
    };

    rsx! {
        section {
            id: "history",
            class: "section active",
            div {
                class: "section-header",
                h2 { "History" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        if require_login(auth, &mut modal) {
                            open_modal(&mut modal, ActiveModal::QuickExpense);
                        }
                    },
                    "Add Expense"
                }
            }
            div { id: "historyList", class: "card-list", {list} }
        }
    }
}

#[component]
fn HistoryItem(expense: Expense) -> Element {
    let amount = money(expense.total_amount);
    let date = short_date_or_blank(expense.created_at.as_ref());
    let category = expense.category.unwrap_or_default();

    rsx! {
        div {
            class: "history-item",
            div {
                class: "expense-info",
                h4 { "{expense.description}" }
                p { "Paid by {expense.payer_name} • {amount}" }
                small { "{date}" }
            }
            div { class: "expense-category", "{category}" }
        }
    }
}
