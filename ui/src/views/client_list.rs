use api::ClientListRequest;
use dioxus::prelude::*;

use crate::auth::{sign_out, use_api, use_auth};
use crate::components::{AppBar, Button, ButtonVariant, Input, Loading};
use crate::toast::use_toast;

#[component]
pub fn ClientListView(
    on_navigate_new: EventHandler<()>,
    on_navigate_client: EventHandler<String>,
    on_navigate_login: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let client = use_api();
    let toast = use_toast();

    let mut name_filter = use_signal(String::new);

    // Whoever lands here without a session goes to login, but only after
    // the persisted-session restore has settled
    use_effect(move || {
        let state = auth();
        if !state.loading && !state.is_authenticated() {
            on_navigate_login.call(());
        }
    });

    let fetch_client = client.clone();
    let clients = use_resource(move || {
        let client = fetch_client.clone();
        let filter = name_filter().trim().to_string();
        let state = auth();
        let mut auth = auth;
        async move {
            let Some(user_id) = state.user_id().map(str::to_string) else {
                return Ok(Vec::new());
            };
            let request = ClientListRequest::for_user(user_id, filter);
            match client.list_clients(&request).await {
                Ok(list) => Ok(list),
                Err(e) if e.is_unauthorized() => {
                    sign_out(&mut auth, &client);
                    toast.error("Your session expired, please sign in again");
                    Err("session expired".to_string())
                }
                Err(e) => {
                    tracing::error!("client list: {e}");
                    Err(e.to_string())
                }
            }
        }
    });

    let logout_client = client.clone();
    let handle_logout = move |_| {
        let mut auth = auth;
        sign_out(&mut auth, &logout_client);
        toast.info("Signed out");
        on_navigate_login.call(());
    };

    rsx! {
        div { class: "screen",
            AppBar {
                title: auth()
                    .username()
                    .map(|name| format!("{name}'s clients"))
                    .unwrap_or_else(|| "Clients".to_string()),
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: handle_logout,
                    "Log out"
                }
            }

            div { class: "list-toolbar",
                Input {
                    class: "list-toolbar__search",
                    placeholder: "Search by name",
                    value: name_filter(),
                    oninput: move |evt: FormEvent| name_filter.set(evt.value()),
                }
                Button {
                    onclick: move |_| on_navigate_new.call(()),
                    "New client"
                }
            }

            {match &*clients.read() {
                None => rsx! {
                    Loading { message: "Loading clients..." }
                },
                Some(Err(message)) => rsx! {
                    div { class: "list-error", "Could not load clients: {message}" }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    div { class: "list-empty",
                        if name_filter().trim().is_empty() {
                            "No clients yet. Create the first one."
                        } else {
                            "No clients match the search."
                        }
                    }
                },
                Some(Ok(list)) => rsx! {
                    ul { class: "client-list",
                        for summary in list.iter() {
                            li {
                                key: "{summary.id}",
                                class: "client-card",
                                onclick: {
                                    let id = summary.id.clone();
                                    move |_| on_navigate_client.call(id.clone())
                                },
                                span { class: "client-card__avatar", "{summary.initials()}" }
                                div { class: "client-card__text",
                                    span { class: "client-card__name", "{summary.full_name()}" }
                                    span { class: "client-card__id", "{summary.identification}" }
                                }
                                span { class: "client-card__chevron", "›" }
                            }
                        }
                    }
                },
            }}
        }
    }
}
