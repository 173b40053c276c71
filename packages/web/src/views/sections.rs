use dioxus::prelude::*;

use ui::views::{FriendsSection, GroupsSection, HistorySection};

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! { ui::views::Home {} }
}

#[component]
pub fn Friends() -> Element {
    rsx! { FriendsSection {} }
}

#[component]
pub fn Groups() -> Element {
    rsx! { GroupsSection {} }
}

#[component]
pub fn History() -> Element {
    rsx! { HistorySection {} }
}

/// Unknown paths fall back to the home section.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();

    use_effect(move || {
        tracing::debug!("Unknown path /{}, redirecting home", segments.join("/"));
        nav.replace(Route::Home {});
    });

    rsx! {}
}
