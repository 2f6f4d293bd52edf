//! Controlled form controls for the login page

mod button;
mod input;
mod toggle;

pub use button::Button;
pub use input::{Checkbox, TextInput};
pub use toggle::VisibilityToggle;
