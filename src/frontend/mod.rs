pub mod components;
pub mod pages;

use leptos::prelude::*;
use pages::LoginPage;

/// Element the server-rendered form is placed in and the app mounts into.
pub const ROOT_ID: &str = "login-root";

/// Application root
#[component]
pub fn App() -> impl IntoView {
    view! { <LoginPage/> }
}
