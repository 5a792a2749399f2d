//! # API crate — REST client for the Clientbook backend
//!
//! This crate is the single point of contact with the remote server. The UI
//! crates never touch `reqwest` directly; they call the typed methods on
//! [`ApiClient`] and get wire models or an [`ApiError`] back.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | HTTP transport: base URL, bearer-token attachment, status mapping |
//! | [`config`] | Base URL and timeout from environment variables |
//! | [`auth`] | `/Authenticate/*` endpoints and the session wire model |
//! | [`clients`] | `/Cliente/*` CRUD endpoints and client wire models |
//! | [`interests`] | `/Intereses/Listado` lookup |
//! | [`validate`] | Pure form-validation and date-conversion helpers |
//!
//! The remote API speaks Spanish on the wire (`nombre`, `apellidos`, ...).
//! Every model keeps those names via `#[serde(rename)]` so the Rust side can
//! use English field names without changing the wire format.

pub mod auth;
pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod interests;
pub mod validate;

pub use auth::{AuthSession, LoginRequest, RegisterRequest};
pub use client::ApiClient;
pub use clients::{ClientDetail, ClientListRequest, ClientSummary, SaveClientRequest, UpdateClientRequest};
pub use config::ApiConfig;
pub use error::ApiError;
pub use interests::Interest;
