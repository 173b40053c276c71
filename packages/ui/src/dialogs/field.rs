use dioxus::prelude::*;

use crate::validation::{Field, FieldErrors, Form};

/// Input type of a form field. `Textarea` renders a multi-line input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Password,
    Number,
    Textarea,
}

impl InputKind {
    fn html_type(&self) -> &'static str {
        match self {
            InputKind::Text | InputKind::Textarea => "text",
            InputKind::Email => "email",
            InputKind::Tel => "tel",
            InputKind::Password => "password",
            InputKind::Number => "number",
        }
    }
}

/// One labelled input bound to a [`Form`] field.
///
/// Leaving the input validates just this field; typing clears its error.
pub fn form_field<F: Form + 'static>(
    mut form: Signal<F>,
    mut errors: Signal<FieldErrors>,
    field: Field,
    label: &str,
    kind: InputKind,
) -> Element {
    let id = field.id();
    let value = form.read().value(field).to_string();
    let error = errors.read().get(field).unwrap_or_default();

    let oninput = move |evt: FormEvent| {
        form.write().set(field, evt.value());
        errors.write().clear(field);
    };
    let onblur = move |_| {
        let outcome = form.read().check(field);
        errors.write().put(field, outcome);
    };

    rsx! {
        div {
            class: "form-group",
            label { r#for: id, "{label}" }
            if kind == InputKind::Textarea {
                textarea {
                    id,
                    name: id,
                    rows: 5,
                    class: if !error.is_empty() { "error" } else { "" },
                    value,
                    oninput,
                    onblur,
                }
            } else {
                input {
                    id,
                    name: id,
                    r#type: kind.html_type(),
                    class: if !error.is_empty() { "error" } else { "" },
                    value,
                    oninput,
                    onblur,
                }
            }
            div { class: "form-error", id: "{id}Error", "{error}" }
        }
    }
}

/// Message for a field that has no text input of its own (checkbox lists).
pub fn field_error(errors: Signal<FieldErrors>, field: Field) -> Element {
    let error = errors.read().get(field).unwrap_or_default();
    let id = format!("{}Error", field.id());
    rsx! {
        div { class: "form-error", id, "{error}" }
    }
}
