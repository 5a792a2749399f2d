use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::LoginView {
            on_navigate_register: move |_| {
                nav.push(Route::Register {});
            },
            on_navigate_clients: move |_| {
                nav.replace(Route::Clients {});
            },
        }
    }
}
