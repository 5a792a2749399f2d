use dioxus::prelude::*;

use crate::auth::{sign_out, use_api, use_auth};
use crate::components::{Button, ButtonVariant, ModalOverlay};
use crate::toast::use_toast;

/// Delete button with a confirmation dialog. Deletion is irreversible, so it
/// never fires from the first click.
#[component]
pub fn ClientDelete(client_id: String, client_name: String, on_deleted: EventHandler<()>) -> Element {
    let mut auth = use_auth();
    let client = use_api();
    let toast = use_toast();

    let mut confirming = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    let delete_client = client.clone();
    let delete_id = client_id.clone();
    let handle_delete = move |_| {
        let client = delete_client.clone();
        let id = delete_id.clone();
        spawn(async move {
            deleting.set(true);
            match client.delete_client(&id).await {
                Ok(()) => {
                    toast.success("Client deleted");
                    on_deleted.call(());
                }
                Err(e) if e.is_unauthorized() => {
                    sign_out(&mut auth, &client);
                    toast.error("Your session expired, please sign in again");
                }
                Err(e) => {
                    tracing::error!("delete client {id}: {e}");
                    toast.error(format!("Could not delete client: {e}"));
                }
            }
            deleting.set(false);
            confirming.set(false);
        });
    };

    rsx! {
        Button {
            variant: ButtonVariant::Destructive,
            onclick: move |_| confirming.set(true),
            "Delete"
        }
        if confirming() {
            ModalOverlay {
                on_close: move |_| confirming.set(false),
                div { class: "modal-body",
                    h2 { "Delete client" }
                    p { "\"{client_name}\" will be permanently removed. This cannot be undone." }
                    div { class: "modal-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            disabled: deleting(),
                            onclick: move |_| confirming.set(false),
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Destructive,
                            disabled: deleting(),
                            onclick: handle_delete,
                            if deleting() { "Deleting..." } else { "Delete" }
                        }
                    }
                }
            }
        }
    }
}
