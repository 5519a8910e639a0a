use dioxus::prelude::*;
use dioxus_primitives::separator as prim;

/// Thin rule between page sections, such as the profile card and the
/// admin area.
#[component]
pub fn Separator(mut props: prim::SeparatorProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "section-rule", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Separator { ..props }
    }
}
