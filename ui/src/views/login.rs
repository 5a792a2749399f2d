use api::{validate, LoginRequest};
use dioxus::prelude::*;
use store::Session;

use crate::auth::{complete_sign_in, use_api, use_auth};
use crate::components::{Button, FieldError, Input, Label};
use crate::toast::use_toast;

#[component]
pub fn LoginView(
    on_navigate_register: EventHandler<()>,
    on_navigate_clients: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let client = use_api();
    let toast = use_toast();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut remember_me = use_signal(|| false);
    let mut username_error = use_signal(|| Option::<String>::None);
    let mut password_error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    // A restored session skips the login screen entirely
    use_effect(move || {
        let state = auth();
        if !state.loading && state.is_authenticated() {
            on_navigate_clients.call(());
        }
    });

    let submit_client = client.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        username_error.set(validate::validate_required("Username", &username()).err());
        password_error.set(validate::validate_required("Password", &password()).err());
        if username_error().is_some() || password_error().is_some() {
            return;
        }

        let client = submit_client.clone();
        let mut auth = auth;
        spawn(async move {
            submitting.set(true);
            let request = LoginRequest {
                username: username().trim().to_string(),
                password: password(),
            };
            match client.login(&request).await {
                Ok(response) => {
                    let session = Session::from_login(
                        &response.token,
                        &response.expiration,
                        &response.user_id,
                        &response.username,
                        remember_me(),
                    );
                    complete_sign_in(&mut auth, &client, session);
                    on_navigate_clients.call(());
                }
                Err(e) => {
                    tracing::warn!("login failed: {e}");
                    toast.error(format!("Sign in failed: {e}"));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "auth-screen",
            div { class: "auth-card",
                h1 { class: "auth-card__title", "Clientbook" }
                p { class: "auth-card__subtitle", "Sign in to manage your clients" }

                form { class: "form", onsubmit: handle_submit,
                    div { class: "field",
                        Label { html_for: "login-username", "Username" }
                        Input {
                            id: "login-username",
                            placeholder: "username",
                            value: username(),
                            oninput: move |evt: FormEvent| username.set(evt.value()),
                        }
                        FieldError { error: username_error() }
                    }

                    div { class: "field",
                        Label { html_for: "login-password", "Password" }
                        Input {
                            id: "login-password",
                            r#type: "password",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                        FieldError { error: password_error() }
                    }

                    label { class: "checkbox",
                        input {
                            r#type: "checkbox",
                            checked: remember_me(),
                            onchange: move |evt| remember_me.set(evt.checked()),
                        }
                        "Remember me"
                    }

                    Button {
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Signing in..." } else { "Sign in" }
                    }
                }

                button {
                    class: "link-button",
                    onclick: move |_| on_navigate_register.call(()),
                    "No account yet? Register"
                }
            }
        }
    }
}
