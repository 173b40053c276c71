use api::{ApiClient, ClientConfig};
use dioxus::prelude::*;

use ui::AppProvider;
use views::{AppShell, Friends, Groups, History, Home, NotFound};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Home {},
        #[route("/friends")]
        Friends {},
        #[route("/groups")]
        Groups {},
        #[route("/history")]
        History {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let config = ClientConfig::load();
    if let Err(e) = dioxus::logger::init(config.log_level()) {
        eprintln!("Logger already initialized: {e}");
    }
    tracing::info!("Starting SplitPro web client");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(ClientConfig::load);
    let client = use_hook(|| ApiClient::new(&config).map_err(|e| e.to_string()));

    let body = match client {
        Ok(client) => rsx! {
            AppProvider {
                client,
                config,
                Router::<Route> {}
            }
        },
        Err(e) => {
            tracing::error!("Could not create API client: {e}");
            rsx! {
                div {
                    class: "fatal-error",
                    h1 { "SplitPro could not start" }
                    p { "{e}" }
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::APP_CSS }
        {body}
    }
}
