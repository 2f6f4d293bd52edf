use std::fmt;

/// User-initiated mutations of the login form.
#[derive(Clone, PartialEq, Eq)]
pub enum FormCommand {
    SetEmail(String),
    SetPassword(String),
    SetRememberMe(bool),
    TogglePasswordVisibility,
}

impl FormCommand {
    /// Short name for log lines. Never includes the carried value.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetEmail(_) => "set_email",
            Self::SetPassword(_) => "set_password",
            Self::SetRememberMe(_) => "set_remember_me",
            Self::TogglePasswordVisibility => "toggle_password_visibility",
        }
    }
}

impl fmt::Debug for FormCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetEmail(email) => f.debug_tuple("SetEmail").field(email).finish(),
            Self::SetPassword(_) => f.debug_tuple("SetPassword").field(&"***").finish(),
            Self::SetRememberMe(on) => f.debug_tuple("SetRememberMe").field(on).finish(),
            Self::TogglePasswordVisibility => f.write_str("TogglePasswordVisibility"),
        }
    }
}
