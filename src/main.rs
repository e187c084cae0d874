//! Campania Reports - Campaign Reports Dashboard
//!
//! A Dioxus frontend for browsing marketing campaigns by date, paginating
//! results and triggering/downloading generated report files. The backend is
//! an external REST service.

mod api;
mod components;
mod files;
mod models;
mod state;

use dioxus::prelude::*;

use components::common::Notification;
use components::search::SearchCard;
use components::table::CampaignTable;
use state::CampaignStore;

fn main() {
    // On wasm, just run the app
    #[cfg(target_arch = "wasm32")]
    {
        run_app();
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("campania_reports=info".parse().unwrap()))
            .init();

        // Load environment variables
        dotenvy::dotenv().ok();

        run_app();
    }
}

fn run_app() {
    // Get API URL - on wasm use window location, on native use env var
    #[cfg(target_arch = "wasm32")]
    let api_url = {
        // On web, use the same origin as the page (for same-origin API requests)
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| "http://localhost:8000".to_string())
    };

    #[cfg(not(target_arch = "wasm32"))]
    let api_url = std::env::var("API_URL")
        .unwrap_or_else(|_| "http://localhost:8000".to_string());

    // Initialize API client
    api::init_api_client(&api_url);

    // Launch the Dioxus app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // The campaign store lives as long as the app root; everything below
    // reaches it through context.
    use_context_provider(CampaignStore::new);

    rsx! {
        // Global styles
        style { {include_str!("../assets/styles.css")} }

        // Notification toast
        Notification {}

        div { class: "page",
            header { class: "page-header",
                h1 { "Campañas" }
                p { class: "page-subtitle", "Consulta de campañas y descarga de reportes" }
            }

            main { class: "page-body",
                SearchCard {}
                CampaignTable {}
            }
        }
    }
}
