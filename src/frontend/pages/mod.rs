//! Page components for the login front end

mod login;

pub use login::LoginPage;
