use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Clients() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::ClientListView {
            on_navigate_new: move |_| {
                nav.push(Route::ClientNew {});
            },
            on_navigate_client: move |id: String| {
                nav.push(Route::ClientEdit { id });
            },
            on_navigate_login: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}

#[component]
pub fn ClientNew() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::ClientFormView {
            on_navigate_back: move |_| {
                nav.replace(Route::Clients {});
            },
            on_navigate_login: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}

#[component]
pub fn ClientEdit(id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::ClientFormView {
            client_id: id,
            on_navigate_back: move |_| {
                nav.replace(Route::Clients {});
            },
            on_navigate_login: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}
