//! This crate contains the shared UI for every platform the app ships on.
//!
//! | Module | Description |
//! |---|---|
//! | [`auth`](crate::use_auth) | Session state, sign-in/out, forced logout on 401 |
//! | [`toast`](crate::use_toast) | App-wide transient notifications |
//! | [`components`] | Small building blocks: buttons, inputs, app bar |
//! | [`views`] | The four screens: login, register, client list, client form |
//!
//! Views never touch the router directly; navigation is injected by the
//! platform crates through `EventHandler` props so desktop and mobile can
//! each wire their own routes.

use dioxus::prelude::*;

pub mod components;

mod session;
pub use session::session_store;

mod auth;
pub use auth::{complete_sign_in, sign_out, use_api, use_auth, AuthProvider, AuthState};

mod toast;
pub use toast::{use_toast, ToastHandle, ToastKind, ToastProvider};

mod photo_field;
pub use photo_field::PhotoField;

mod client_delete;
pub use client_delete::ClientDelete;

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
