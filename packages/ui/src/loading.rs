use dioxus::prelude::*;

/// Number of requests currently holding the busy overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Busy(pub u32);

pub fn use_busy() -> Signal<Busy> {
    use_context::<Signal<Busy>>()
}

/// Shows the overlay for as long as it is alive.
pub struct BusyGuard {
    count: Signal<Busy>,
}

impl BusyGuard {
    pub fn new(mut count: Signal<Busy>) -> Self {
        count.write().0 += 1;
        Self { count }
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        // the owning scope may already be gone
        if let Ok(mut busy) = self.count.try_write() {
            busy.0 = busy.0.saturating_sub(1);
        }
    }
}

#[component]
pub fn LoadingOverlay() -> Element {
    let busy = use_busy();

    if busy().0 == 0 {
        return rsx! {};
    }

    rsx! {
        div {
            class: "loading-overlay",
            div { class: "spinner" }
        }
    }
}
