use dioxus::prelude::*;
use views::{ClientEdit, ClientNew, Clients, Login, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/clients")]
    Clients {},
    #[route("/clients/new")]
    ClientNew {},
    #[route("/clients/:id")]
    ClientEdit { id: String },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        ui::ToastProvider {
            ui::AuthProvider {
                Router::<Route> {}
            }
        }
    }
}

#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    if !auth().loading {
        if auth().is_authenticated() {
            nav.replace(Route::Clients {});
        } else {
            nav.replace(Route::Login {});
        }
    }

    rsx! {}
}
