//! View model of the login form.
//!
//! [`LoginFormView::render`] is the only way displayed values are produced,
//! so every control always shows exactly what the state holds.

use crate::form::{Field, LoginFormState};

pub const SHOW_PASSWORD: &str = "Show password";
pub const HIDE_PASSWORD: &str = "Hide password";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputType {
    Email,
    Password,
    Text,
}

impl InputType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::Text => "text",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputView {
    pub id: &'static str,
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub autocomplete: &'static str,
    pub input_type: InputType,
    pub required: bool,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckboxView {
    pub id: &'static str,
    pub name: &'static str,
    pub label: &'static str,
    pub checked: bool,
}

/// Password visibility button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleView {
    pub pressed: bool,
    /// Describes what the next activation does.
    pub label: &'static str,
    pub controls: &'static str,
}

impl ToggleView {
    pub const fn aria_pressed(&self) -> &'static str {
        if self.pressed { "true" } else { "false" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginFormView {
    pub email: InputView,
    pub password: InputView,
    pub remember_me: CheckboxView,
    pub toggle: ToggleView,
    pub submit_label: &'static str,
}

impl LoginFormView {
    pub fn render(state: &LoginFormState) -> Self {
        let visible = state.password_visible();

        Self {
            email: InputView {
                id: Field::Email.id(),
                name: Field::Email.id(),
                label: Field::Email.label(),
                placeholder: "you@example.com",
                autocomplete: "email",
                input_type: InputType::Email,
                required: true,
                value: state.email().to_string(),
            },
            password: InputView {
                id: Field::Password.id(),
                name: Field::Password.id(),
                label: Field::Password.label(),
                placeholder: "••••••••",
                autocomplete: "current-password",
                input_type: if visible {
                    InputType::Text
                } else {
                    InputType::Password
                },
                required: true,
                value: state.password().to_string(),
            },
            remember_me: CheckboxView {
                id: Field::RememberMe.id(),
                name: Field::RememberMe.id(),
                label: Field::RememberMe.label(),
                checked: state.remember_me(),
            },
            toggle: ToggleView {
                pressed: visible,
                label: if visible { HIDE_PASSWORD } else { SHOW_PASSWORD },
                controls: Field::Password.id(),
            },
            submit_label: "Sign In",
        }
    }
}
