use dioxus::prelude::*;
use shared_types::{ClientConfig, ImagesConfig};

mod admin_actions;
mod api;
mod auth;
mod components;
mod dashboard_loader;
mod host;
mod pass_status;
mod role_gate;
mod routes;
mod session;
#[cfg(test)]
mod test_support;

use api::HttpApi;
use auth::AuthState;
use routes::Route;
use session::{BrowserStore, SessionContext};

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

/// Client configuration, baked in at build time.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Everything a route needs to talk to storage and the server.
#[derive(Clone)]
pub struct Services {
    pub session: SessionContext<BrowserStore>,
    pub api: HttpApi,
    pub images: ImagesConfig,
}

impl Services {
    fn from_config(config: &ClientConfig) -> Self {
        Self {
            session: SessionContext::new(BrowserStore::new(&config.storage.credential_key)),
            api: HttpApi::new(&config.api),
            images: config.images.clone(),
        }
    }
}

/// Parse the embedded config. A broken file falls back to defaults.
fn load_config() -> ClientConfig {
    ClientConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config.toml could not be parsed, using defaults");
        ClientConfig::default()
    })
}

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("[logger] failed to initialize: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Services::from_config(&load_config()));
    use_context_provider(AuthState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            },
            Router::<Route> {}
        }
    }
}
