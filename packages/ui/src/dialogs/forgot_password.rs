use dioxus::prelude::*;

use crate::context::use_api;
use crate::dialogs::field::{form_field, InputKind};
use crate::loading::{use_busy, BusyGuard};
use crate::modal::{close_modal, use_modal};
use crate::notifications::{describe_failure, notify_error, notify_success, use_notifications};
use crate::validation::{Field, FieldErrors, ForgotPasswordForm, Form};
use crate::views::ModalOverlay;

#[component]
pub fn ForgotPasswordDialog() -> Element {
    let mut modal = use_modal();
    let mut notices = use_notifications();
    let busy = use_busy();
    let api = use_api();

    let form = use_signal(ForgotPasswordForm::default);
    let mut errors = use_signal(FieldErrors::default);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let found = form.read().validate();
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }
        let email = form.read().email.clone();
        let api = api.clone();
        spawn(async move {
            let _busy = BusyGuard::new(busy);
            match api.forgot_password(&email).await {
                Ok(()) => {
                    close_modal(&mut modal);
                    notify_success(&mut notices, "Password reset instructions sent to your email!");
                }
                Err(e) => notify_error(
                    &mut notices,
                    describe_failure(&e, "Failed to send reset email"),
                ),
            }
        });
    };

    rsx! {
        ModalOverlay {
            id: "forgotPasswordModal",
            title: "Reset Password",
            form {
                id: "forgotPasswordForm",
                novalidate: true,
                onsubmit,
                p { "Enter your email address and we'll send you reset instructions." }
                {form_field(form, errors, Field::ForgotEmail, "Email", InputKind::Email)}
                button { r#type: "submit", class: "btn btn-primary btn-block", "Send Reset Link" }
            }
        }
    }
}
