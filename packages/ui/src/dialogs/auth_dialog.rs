use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::context::use_api;
use crate::dialogs::field::{form_field, InputKind};
use crate::loading::{use_busy, BusyGuard};
use crate::modal::{close_modal, open_modal, use_modal, ActiveModal, AuthMode};
use crate::notifications::{describe_failure, notify_error, notify_success, use_notifications};
use crate::validation::{Field, FieldErrors, Form, LoginForm, SignupForm};
use crate::views::ModalOverlay;

const PASSWORD_HINT: &str =
    "At least 7 characters with uppercase, number, and special character";

/// Sign In / Sign Up dialog.
#[component]
pub fn AuthDialog(mode: AuthMode) -> Element {
    let mut modal = use_modal();
    let mut auth = use_auth();
    let mut notices = use_notifications();
    let busy = use_busy();
    let api = use_api();

    let mut login = use_signal(LoginForm::default);
    let mut login_errors = use_signal(FieldErrors::default);
    let mut signup = use_signal(SignupForm::default);
    let mut signup_errors = use_signal(FieldErrors::default);
    let mut submitting = use_signal(|| false);

    let login_api = api.clone();
    let on_login = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let errors = login.read().validate();
        let valid = errors.is_empty();
        login_errors.set(errors);
        if !valid {
            return;
        }
        let request = login.read().to_request();
        let api = login_api.clone();
        spawn(async move {
            submitting.set(true);
            let _busy = BusyGuard::new(busy);
            match api.login(&request).await {
                Ok(user) => {
                    auth.write().user = Some(user);
                    login.set(LoginForm::default());
                    close_modal(&mut modal);
                    notify_success(&mut notices, "Successfully signed in!");
                }
                Err(e) => notify_error(&mut notices, describe_failure(&e, "login failed")),
            }
            submitting.set(false);
        });
    };

    let signup_api = api.clone();
    let on_signup = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let (errors, contact) = signup.read().validate_submit();
        let valid = errors.is_empty();
        signup_errors.set(errors);
        if let Some(message) = contact {
            notify_error(&mut notices, message);
            return;
        }
        if !valid {
            return;
        }
        let request = signup.read().to_request();
        let api = signup_api.clone();
        spawn(async move {
            submitting.set(true);
            let _busy = BusyGuard::new(busy);
            match api.signup(&request).await {
                Ok(user) => {
                    auth.write().user = Some(user);
                    signup.set(SignupForm::default());
                    close_modal(&mut modal);
                    notify_success(&mut notices, "Successfully signed up!");
                }
                Err(e) => notify_error(&mut notices, describe_failure(&e, "signup failed")),
            }
            submitting.set(false);
        });
    };

    let title = match mode {
        AuthMode::SignIn => "Sign In",
        AuthMode::SignUp => "Sign Up",
    };

    rsx! {
        ModalOverlay {
            id: "authModal",
            title: "{title}",
            if mode == AuthMode::SignIn {
                form {
                    id: "loginForm",
                    novalidate: true,
                    onsubmit: on_login,
                    {form_field(login, login_errors, Field::LoginIdentifier, "Email or Phone", InputKind::Text)}
                    {form_field(login, login_errors, Field::LoginPassword, "Password", InputKind::Password)}
                    div {
                        class: "form-group",
                        button {
                            r#type: "submit",
                            class: "btn btn-primary btn-block",
                            disabled: submitting(),
                            "Sign In"
                        }
                    }
                    div {
                        class: "form-group text-center",
                        p {
                            "Don't have an account? "
                            a {
                                href: "#",
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    open_modal(&mut modal, ActiveModal::Auth(AuthMode::SignUp));
                                },
                                "Sign up"
                            }
                        }
                        p {
                            a {
                                href: "#",
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    open_modal(&mut modal, ActiveModal::ForgotPassword);
                                },
                                "Forgot password?"
                            }
                        }
                    }
                }
            } else {
                form {
                    id: "signupForm",
                    novalidate: true,
                    onsubmit: on_signup,
                    {form_field(signup, signup_errors, Field::SignupName, "Full Name", InputKind::Text)}
                    {form_field(signup, signup_errors, Field::SignupEmail, "Email", InputKind::Email)}
                    {form_field(signup, signup_errors, Field::SignupPhone, "Phone", InputKind::Tel)}
                    {form_field(signup, signup_errors, Field::SignupPassword, "Password", InputKind::Password)}
                    small { class: "form-hint", "{PASSWORD_HINT}" }
                    {form_field(signup, signup_errors, Field::SignupPasswordConfirm, "Confirm Password", InputKind::Password)}
                    div {
                        class: "form-group",
                        button {
                            r#type: "submit",
                            class: "btn btn-primary btn-block",
                            disabled: submitting(),
                            "Sign Up"
                        }
                    }
                    div {
                        class: "form-group text-center",
                        p {
                            "Already have an account? "
                            a {
                                href: "#",
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    open_modal(&mut modal, ActiveModal::Auth(AuthMode::SignIn));
                                },
                                "Sign in"
                            }
                        }
                    }
                }
            }
        }
    }
}
