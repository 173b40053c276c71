use dioxus::prelude::*;

use crate::context::use_api;
use crate::dialogs::field::{form_field, InputKind};
use crate::loading::{use_busy, BusyGuard};
use crate::modal::{close_modal, use_modal};
use crate::notifications::{describe_failure, notify_error, notify_success, use_notifications};
use crate::validation::{Field, FieldErrors, Form, SupportForm};
use crate::views::ModalOverlay;

/// Contact Support form. Open to signed-out visitors too.
#[component]
pub fn SupportDialog() -> Element {
    let mut modal = use_modal();
    let mut notices = use_notifications();
    let busy = use_busy();
    let api = use_api();

    let mut form = use_signal(SupportForm::default);
    let mut errors = use_signal(FieldErrors::default);
    let mut sending = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if sending() {
            return;
        }
        let found = form.read().validate();
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }
        let request = form.read().to_request();
        let api = api.clone();
        spawn(async move {
            sending.set(true);
            let _busy = BusyGuard::new(busy);
            match api.send_support(&request).await {
                Ok(_) => {
                    form.set(SupportForm::default());
                    close_modal(&mut modal);
                    notify_success(&mut notices, "Support message sent successfully!");
                }
                Err(e) => notify_error(&mut notices, describe_failure(&e, "Failed to send message")),
            }
            sending.set(false);
        });
    };

    rsx! {
        ModalOverlay {
            id: "supportModal",
            title: "Contact Support",
            form {
                id: "supportForm",
                novalidate: true,
                onsubmit,
                {form_field(form, errors, Field::SupportName, "Name", InputKind::Text)}
                {form_field(form, errors, Field::SupportEmail, "Email", InputKind::Email)}
                {form_field(form, errors, Field::SupportPhone, "Phone (optional)", InputKind::Tel)}
                {form_field(form, errors, Field::SupportMessage, "Message", InputKind::Textarea)}
                button {
                    r#type: "submit",
                    class: "btn btn-primary btn-block",
                    disabled: sending(),
                    "Send Message"
                }
            }
        }
    }
}
