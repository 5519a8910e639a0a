use crate::routes::Route;
use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

/// Catch-all for paths the router does not know. Offers a way back to the
/// public status page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "missing-page",
            Card {
                CardHeader {
                    span { class: "missing-status", "404" }
                    CardTitle { "Nothing here" }
                    CardDescription { "No page lives at " code { "{path}" } "." }
                }
                CardContent {
                    Link { to: Route::Home {}, class: "missing-back",
                        "See the current pass status"
                    }
                }
            }
        }
    }
}
