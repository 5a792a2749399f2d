use api::{validate, RegisterRequest};
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::components::{Button, FieldError, Input, Label};
use crate::toast::use_toast;

#[component]
pub fn RegisterView(on_navigate_login: EventHandler<()>) -> Element {
    let client = use_api();
    let toast = use_toast();

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut username_error = use_signal(|| Option::<String>::None);
    let mut email_error = use_signal(|| Option::<String>::None);
    let mut password_error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let submit_client = client.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        username_error.set(validate::validate_required("Username", &username()).err());
        email_error.set(validate::validate_email(&email()).err());
        password_error.set(validate::validate_password(&password()).err());
        if username_error().is_some() || email_error().is_some() || password_error().is_some() {
            return;
        }

        let client = submit_client.clone();
        spawn(async move {
            submitting.set(true);
            let request = RegisterRequest {
                username: username().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
            };
            match client.register(&request).await {
                Ok(_) => {
                    toast.success("Account created, you can sign in now");
                    on_navigate_login.call(());
                }
                Err(e) => {
                    tracing::warn!("registration failed: {e}");
                    toast.error(format!("Registration failed: {e}"));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "auth-screen",
            div { class: "auth-card",
                h1 { class: "auth-card__title", "Create account" }
                p { class: "auth-card__subtitle",
                    "Passwords need 9-20 characters with a digit, an uppercase and a lowercase letter"
                }

                form { class: "form", onsubmit: handle_submit,
                    div { class: "field",
                        Label { html_for: "register-username", "Username" }
                        Input {
                            id: "register-username",
                            value: username(),
                            oninput: move |evt: FormEvent| username.set(evt.value()),
                        }
                        FieldError { error: username_error() }
                    }

                    div { class: "field",
                        Label { html_for: "register-email", "Email" }
                        Input {
                            id: "register-email",
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                        FieldError { error: email_error() }
                    }

                    div { class: "field",
                        Label { html_for: "register-password", "Password" }
                        Input {
                            id: "register-password",
                            r#type: "password",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                        FieldError { error: password_error() }
                    }

                    Button {
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Creating account..." } else { "Register" }
                    }
                }

                button {
                    class: "link-button",
                    onclick: move |_| on_navigate_login.call(()),
                    "Already registered? Sign in"
                }
            }
        }
    }
}
