use dioxus::prelude::*;

/// Controlled text input. Extra attributes such as `id` or `autocomplete`
/// land on the `<input>` itself.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let merged = dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", "input", None, false)],
        attributes,
    ]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            r#type: "{input_type}",
            value,
            placeholder,
            disabled,
            oninput: move |evt| on_input.call(evt),
            ..merged,
        }
    }
}
