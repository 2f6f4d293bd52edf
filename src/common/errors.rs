use std::net::AddrParseError;

use thiserror::Error;

use crate::form::Field;

/// Constraint failures the host form validation reports on submit.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    ValueMissing(Field),

    #[error("{0} must be a valid email address")]
    TypeMismatch(Field),
}

impl ValidationError {
    /// The control that should receive focus.
    pub fn field(&self) -> Field {
        match self {
            Self::ValueMissing(field) | Self::TypeMismatch(field) => *field,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid BIND_ADDR {value:?}: {source}")]
    BindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },

    #[error("Invalid BUNDLE_PATH {0:?}: must be an absolute URL path without quotes, angle brackets, backslashes or whitespace")]
    BundlePath(String),
}
