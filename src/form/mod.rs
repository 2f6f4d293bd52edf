//! Client-side state machine of the login form.

pub use command::*;
pub use state::*;
pub use store::*;
pub use submit::*;
pub use view::*;

mod command;
mod state;
mod store;
mod submit;
pub mod validation;
mod view;
