use api::ExpenseCategory;
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::context::use_api;
use crate::dialogs::field::{field_error, form_field, InputKind};
use crate::dialogs::group::{use_friend_options, FriendPicker};
use crate::loading::{use_busy, BusyGuard};
use crate::modal::{close_modal, use_modal};
use crate::notifications::{
    describe_failure, fixed_failure, notify_error, notify_success, use_notifications,
};
use crate::refresh::{reload_groups, reload_history, use_revisions};
use crate::validation::{ExpenseForm, Field, FieldErrors, Form};
use crate::views::ModalOverlay;

/// Adds an expense paid by the signed-in user and split equally.
#[component]
pub fn QuickExpenseDialog() -> Element {
    let mut modal = use_modal();
    let mut notices = use_notifications();
    let mut revisions = use_revisions();
    let auth = use_auth();
    let busy = use_busy();
    let api = use_api();

    let mut form = use_signal(ExpenseForm::default);
    let mut errors = use_signal(FieldErrors::default);
    let friends = use_friend_options();

    let groups_api = api.clone();
    let groups = use_resource(move || {
        let api = groups_api.clone();
        async move {
            match api.groups().await {
                Ok(groups) => groups,
                Err(e) => {
                    notify_error(&mut notices, fixed_failure(&e, "Failed to load groups"));
                    Vec::new()
                }
            }
        }
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let found = form.read().validate();
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }
        let Some(payer_id) = auth.read().user.as_ref().map(|u| u.id.clone()) else {
            return;
        };
        let Some(request) = form.read().to_request(&payer_id) else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            let _busy = BusyGuard::new(busy);
            match api.create_expense(&request).await {
                Ok(expense) => {
                    tracing::info!("Created expense {}", expense.id);
                    close_modal(&mut modal);
                    notify_success(&mut notices, "Expense added successfully!");
                    reload_history(&mut revisions);
                    if expense.group_id.is_some() {
                        reload_groups(&mut revisions);
                    }
                }
                Err(e) => notify_error(&mut notices, describe_failure(&e, "Failed to add expense")),
            }
        });
    };

    let friend_options = friends.read().as_ref().cloned().unwrap_or_default();
    let group_options = groups.read().as_ref().cloned().unwrap_or_default();
    let selected = form.read().participant_ids.clone();
    let category = form.read().category;
    let group_id = form.read().group_id.clone().unwrap_or_default();

    rsx! {
        ModalOverlay {
            id: "quickExpenseModal",
            title: "Add Expense",
            form {
                id: "quickExpenseForm",
                novalidate: true,
                onsubmit,
                {form_field(form, errors, Field::ExpenseDescription, "Description", InputKind::Text)}
                {form_field(form, errors, Field::ExpenseAmount, "Amount (USD)", InputKind::Number)}
                div {
                    class: "form-group",
                    label { r#for: "expenseCategory", "Category" }
                    select {
                        id: "expenseCategory",
                        value: category.code(),
                        onchange: move |evt: FormEvent| {
                            form.write().category =
                                ExpenseCategory::from_code(&evt.value()).unwrap_or_default();
                        },
                        for choice in ExpenseCategory::ALL {
                            option {
                                value: choice.code(),
                                selected: choice == category,
                                "{choice}"
                            }
                        }
                    }
                }
                div {
                    class: "form-group",
                    label { r#for: "expenseGroup", "Group (optional)" }
                    select {
                        id: "expenseGroup",
                        value: "{group_id}",
                        onchange: move |evt: FormEvent| {
                            let value = evt.value();
                            form.write().group_id = (!value.is_empty()).then_some(value);
                        },
                        option { value: "", "No group" }
                        for group in group_options {
                            option {
                                key: "{group.id}",
                                value: "{group.id}",
                                selected: group.id == group_id,
                                "{group.name}"
                            }
                        }
                    }
                }
                div {
                    class: "form-group",
                    label { "Split equally with" }
                    FriendPicker {
                        field: Field::ExpenseParticipants,
                        friends: friend_options,
                        selected,
                        on_toggle: move |id: String| {
                            form.write().toggle_participant(&id);
                            errors.write().clear(Field::ExpenseParticipants);
                        },
                    }
                    {field_error(errors, Field::ExpenseParticipants)}
                }
                button { r#type: "submit", class: "btn btn-primary btn-block", "Add Expense" }
            }
        }
    }
}
