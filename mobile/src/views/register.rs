use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Register() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::RegisterView {
            on_navigate_login: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}
