use std::fmt;

use crate::form::FormCommand;
use crate::types::LoginRequest;

/// Controls of the login form, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Password,
    RememberMe,
}

impl Field {
    /// Element id, also used as the form field name.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::RememberMe => "remember-me",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Password => "Password",
            Self::RememberMe => "Remember me",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Local state of one mounted login form.
///
/// Only [`LoginFormState::apply`] mutates it, and it stores whatever it is
/// given: no trimming, normalization or validation happens here.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginFormState {
    email: String,
    password: String,
    remember_me: bool,
    password_visible: bool,
}

impl LoginFormState {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn remember_me(&self) -> bool {
        self.remember_me
    }

    /// Rendering hint only; never part of a submission.
    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn apply(&mut self, command: FormCommand) {
        match command {
            FormCommand::SetEmail(email) => self.email = email,
            FormCommand::SetPassword(password) => self.password = password,
            FormCommand::SetRememberMe(remember_me) => self.remember_me = remember_me,
            FormCommand::TogglePasswordVisibility => {
                self.password_visible = !self.password_visible
            }
        }
    }

    /// Copy of the submittable fields.
    pub fn snapshot(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            remember_me: self.remember_me,
        }
    }
}

impl fmt::Debug for LoginFormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginFormState")
            .field("email", &self.email)
            .field("password", &"***")
            .field("remember_me", &self.remember_me)
            .field("password_visible", &self.password_visible)
            .finish()
    }
}
