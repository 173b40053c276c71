use api::{ApiClient, ClientConfig};
use dioxus::prelude::*;

use crate::auth::AuthProvider;
use crate::loading::Busy;
use crate::modal::ActiveModal;
use crate::notifications::Notifications;
use crate::refresh::Revisions;

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Installs every shared context the components expect, then resolves the
/// signed-in user.
#[component]
pub fn AppProvider(client: ApiClient, config: ClientConfig, children: Element) -> Element {
    let timeout = config.notification_timeout();
    use_context_provider(|| client);
    use_context_provider(|| config);
    use_context_provider(|| Signal::new(Notifications::with_timeout(timeout)));
    use_context_provider(|| Signal::new(Busy::default()));
    use_context_provider(|| Signal::new(None::<ActiveModal>));
    use_context_provider(|| Signal::new(Revisions::default()));

    rsx! {
        AuthProvider { {children} }
    }
}
