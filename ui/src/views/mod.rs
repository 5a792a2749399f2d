//! The app's screens. Each view receives navigation callbacks from the
//! platform crate instead of depending on a concrete router.

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod client_list;
pub use client_list::ClientListView;

mod client_form;
pub use client_form::ClientFormView;
