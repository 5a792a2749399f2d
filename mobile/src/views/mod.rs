mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod clients;
pub use clients::{ClientEdit, ClientNew, Clients};
