use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default = false)] disabled: bool,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let input_type = r#type;
    rsx! {
        input {
            id: "{id}",
            class: format!("input {class}"),
            r#type: input_type,
            placeholder: "{placeholder}",
            disabled,
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}
