//! Small building blocks shared by the views.

mod app_bar;
pub use app_bar::AppBar;

mod button;
pub use button::{Button, ButtonVariant};

mod field_error;
pub use field_error::FieldError;

mod input;
pub use input::Input;

mod label;
pub use label::Label;

mod loading;
pub use loading::Loading;

mod modal_overlay;
pub use modal_overlay::ModalOverlay;
