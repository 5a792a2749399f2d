pub mod session;

mod file_store;
pub use file_store::SessionStore;

pub use session::Session;
