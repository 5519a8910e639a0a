use crate::components::PassStatusPanel;
use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

/// Public landing page. Shows the pass status to anyone, signed in or not.
#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "home-page",
            Card {
                CardHeader {
                    CardTitle { "Paso Internacional Cristo Redentor" }
                    CardDescription { "Estado actual del paso fronterizo" }
                }
                CardContent {
                    PassStatusPanel {}
                }
            }
        }
    }
}
