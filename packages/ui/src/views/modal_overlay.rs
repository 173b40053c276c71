use dioxus::prelude::*;

use crate::modal::{close_modal, use_modal};

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card or on the close button closes the active modal.
#[component]
pub fn ModalOverlay(id: String, title: String, children: Element) -> Element {
    let mut modal = use_modal();

    rsx! {
        div {
            id: "{id}",
            class: "modal",
            onclick: move |_| close_modal(&mut modal),
            div {
                class: "modal-content",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-header",
                    h2 { "{title}" }
                    button {
                        class: "modal-close",
                        "aria-label": "Close",
                        onclick: move |_| close_modal(&mut modal),
                        "×"
                    }
                }
                div {
                    class: "modal-body",
                    {children}
                }
            }
        }
    }
}
