use dioxus::prelude::*;

/// Validation message slot under a form field. Renders nothing when the
/// field is valid so the layout does not jump.
#[component]
pub fn FieldError(#[props(!optional)] error: Option<String>) -> Element {
    rsx! {
        if let Some(message) = error {
            span { class: "field-error", "{message}" }
        }
    }
}
