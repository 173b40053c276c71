use api::Friend;
use dioxus::prelude::*;

use crate::context::use_api;
use crate::dialogs::field::{field_error, form_field, InputKind};
use crate::loading::{use_busy, BusyGuard};
use crate::modal::{close_modal, use_modal};
use crate::notifications::{
    describe_failure, fixed_failure, notify_error, notify_success, use_notifications,
};
use crate::refresh::{reload_groups, use_revisions};
use crate::validation::{Field, FieldErrors, Form, GroupForm};
use crate::views::ModalOverlay;

/// Friends the user can pick as group members or expense participants.
#[component]
pub fn FriendPicker(
    field: Field,
    friends: Vec<Friend>,
    selected: Vec<String>,
    on_toggle: EventHandler<String>,
) -> Element {
    if friends.is_empty() {
        return rsx! {
            p { class: "empty-state", "Add friends first to include them here." }
        };
    }

    rsx! {
        div {
            class: "friend-picker",
            id: field.id(),
            for friend in friends {
                label {
                    key: "{friend.friend_id}",
                    class: "friend-picker-option",
                    input {
                        r#type: "checkbox",
                        checked: selected.contains(&friend.friend_id),
                        onchange: {
                            let id = friend.friend_id.clone();
                            move |_| on_toggle.call(id.clone())
                        },
                    }
                    span { "{friend.friend_name}" }
                }
            }
        }
    }
}

/// Loads the friend list for a picker, reporting failures once.
pub(crate) fn use_friend_options() -> Resource<Vec<Friend>> {
    let api = use_api();
    let notices = use_notifications();
    use_resource(move || {
        let api = api.clone();
        let mut notices = notices;
        async move {
            match api.friends().await {
                Ok(friends) => friends,
                Err(e) => {
                    notify_error(&mut notices, fixed_failure(&e, "Failed to load friends"));
                    Vec::new()
                }
            }
        }
    })
}

#[component]
pub fn CreateGroupDialog() -> Element {
    let mut modal = use_modal();
    let mut notices = use_notifications();
    let mut revisions = use_revisions();
    let busy = use_busy();
    let api = use_api();

    let mut form = use_signal(GroupForm::default);
    let mut errors = use_signal(FieldErrors::default);
    let friends = use_friend_options();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let found = form.read().validate();
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }
        let request = form.read().to_request();
        let api = api.clone();
        spawn(async move {
            let _busy = BusyGuard::new(busy);
            match api.create_group(&request).await {
                Ok(group) => {
                    tracing::info!("Created group {}", group.id);
                    close_modal(&mut modal);
                    notify_success(&mut notices, "Group created successfully!");
                    reload_groups(&mut revisions);
                }
                Err(e) => notify_error(&mut notices, describe_failure(&e, "Failed to create group")),
            }
        });
    };

    let options = friends.read().as_ref().cloned().unwrap_or_default();
    let selected = form.read().member_ids.clone();

    rsx! {
        ModalOverlay {
            id: "createGroupModal",
            title: "Create Group",
            form {
                id: "createGroupForm",
                novalidate: true,
                onsubmit,
                {form_field(form, errors, Field::GroupName, "Group Name", InputKind::Text)}
                {form_field(form, errors, Field::GroupDescription, "Description (optional)", InputKind::Textarea)}
                div {
                    class: "form-group",
                    label { "Members" }
                    FriendPicker {
                        field: Field::GroupMembers,
                        friends: options,
                        selected,
                        on_toggle: move |id: String| {
                            form.write().toggle_member(&id);
                            errors.write().clear(Field::GroupMembers);
                        },
                    }
                    {field_error(errors, Field::GroupMembers)}
                }
                button { r#type: "submit", class: "btn btn-primary btn-block", "Create Group" }
            }
        }
    }
}
