use dioxus::prelude::*;

/// Top bar with an optional back arrow and a slot for actions on the right.
#[component]
pub fn AppBar(
    title: String,
    #[props(optional)] on_back: Option<EventHandler<()>>,
    #[props(default = VNode::empty())] children: Element,
) -> Element {
    rsx! {
        header { class: "app-bar",
            if let Some(back) = on_back {
                button {
                    class: "app-bar__back",
                    onclick: move |_| back.call(()),
                    "←"
                }
            }
            h1 { class: "app-bar__title", "{title}" }
            div { class: "app-bar__actions", {children} }
        }
    }
}
