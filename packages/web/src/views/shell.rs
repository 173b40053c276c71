use dioxus::prelude::*;

use ui::views::Footer;
use ui::{LoadingOverlay, ModalHost, Navbar, NotificationStack};

use crate::Route;

/// Links to the four sections, shared by the navbar and the footer.
#[component]
fn SectionLinks(class: String) -> Element {
    rsx! {
        Link { class: "{class}", active_class: "active", to: Route::Home {}, "Home" }
        Link { class: "{class}", active_class: "active", to: Route::Friends {}, "Friends" }
        Link { class: "{class}", active_class: "active", to: Route::Groups {}, "Groups" }
        Link { class: "{class}", active_class: "active", to: Route::History {}, "History" }
    }
}

/// Layout around every section: navbar, footer and the overlays.
#[component]
pub fn AppShell() -> Element {
    rsx! {
        div {
            class: "app-shell",
            Navbar {
                SectionLinks { class: "nav-link" }
            }
            main {
                class: "app-main",
                Outlet::<Route> {}
            }
            Footer {
                SectionLinks { class: "footer-link" }
            }
            ModalHost {}
            NotificationStack {}
            LoadingOverlay {}
        }
    }
}
