use dioxus::prelude::*;

use crate::modal::{open_modal, use_modal, ActiveModal};

/// Page footer. `children` are the section links.
#[component]
pub fn Footer(children: Element) -> Element {
    let mut modal = use_modal();

    rsx! {
        footer {
            class: "footer",
            div {
                class: "footer-content",
                div {
                    class: "footer-section",
                    h4 { "SplitPro" }
                    p { "Split bills with friends and groups." }
                }
                div {
                    class: "footer-section",
                    h4 { "Sections" }
                    {children}
                }
                div {
                    class: "footer-section",
                    h4 { "Help" }
                    button {
                        id: "supportBtn",
                        class: "btn btn-outline",
                        onclick: move |_| open_modal(&mut modal, ActiveModal::Support),
                        "Contact Support"
                    }
                }
            }
        }
    }
}
