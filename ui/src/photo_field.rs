use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use dioxus::prelude::*;

/// Photo picker for the client form. The value is the base64-encoded image
/// body, matching what the API stores in the `imagen` field.
#[component]
pub fn PhotoField(value: String, on_change: EventHandler<String>) -> Element {
    let has_photo = !value.is_empty();

    rsx! {
        div { class: "photo-field",
            if has_photo {
                img {
                    class: "photo-field__preview",
                    src: "data:image/jpeg;base64,{value}",
                    alt: "Client photo",
                }
            } else {
                div { class: "photo-field__placeholder", "No photo" }
            }
            div { class: "photo-field__controls",
                input {
                    r#type: "file",
                    accept: "image/*",
                    onchange: move |evt| {
                        if let Some(file_engine) = evt.files() {
                            spawn(async move {
                                let files = file_engine.files();
                                let Some(name) = files.first() else {
                                    return;
                                };
                                match file_engine.read_file(name).await {
                                    Some(bytes) => on_change.call(BASE64.encode(bytes)),
                                    None => tracing::warn!("could not read selected photo {name}"),
                                }
                            });
                        }
                    },
                }
                if has_photo {
                    button {
                        class: "btn btn--outline",
                        r#type: "button",
                        onclick: move |_| on_change.call(String::new()),
                        "Remove"
                    }
                }
            }
        }
    }
}
