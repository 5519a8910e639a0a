use crate::pass_status::poll_pass_status;
use crate::Services;
use dioxus::prelude::*;
use shared_types::PassIndicator;

/// Public pass status light and photo. Fetched once per mount, no polling.
#[component]
pub fn PassStatusPanel() -> Element {
    let services = use_context::<Services>();

    let indicator = use_resource(move || {
        let services = services.clone();
        async move { poll_pass_status(&services.api, &services.images).await }
    });

    let current = indicator
        .read()
        .as_ref()
        .cloned()
        .unwrap_or_else(PassIndicator::loading);
    let color = current.color().as_css();
    let label = current.label();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pass_status_panel.css") }

        section { class: "pass-status-panel",
            div {
                id: "pass-status-container",
                class: "pass-status",
                style: "background-color: {color};",
                span { id: "pass-status-text", class: "pass-status-text", "{label}" }
            }
            if let Some(src) = current.image_src {
                img {
                    id: "pass-image",
                    class: "pass-image",
                    src: "{src}",
                    alt: "Paso internacional",
                }
            }
        }
    }
}
