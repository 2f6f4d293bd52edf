//! Server-rendered login page.
//!
//! Renders the form's view model as static markup so the page paints before
//! the wasm bundle mounts. The controls stay in a disabled fieldset until
//! then, so the host can never submit the form natively.

use askama::Template;

use crate::form::{LoginFormState, LoginFormView};
use crate::frontend::ROOT_ID;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPageTemplate {
    pub root_id: &'static str,
    pub bundle: String,
    pub form: LoginFormView,
}

impl LoginPageTemplate {
    pub fn new(state: &LoginFormState, bundle: impl Into<String>) -> Self {
        Self {
            root_id: ROOT_ID,
            bundle: bundle.into(),
            form: LoginFormView::render(state),
        }
    }
}
