use std::net::SocketAddr;
use std::path::PathBuf;

use crate::common::ConfigError;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_STATIC_DIR: &str = "./static";
const DEFAULT_PKG_DIR: &str = "./pkg";
const DEFAULT_BUNDLE_PATH: &str = "/pkg/loginform.js";

/// Page server settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    /// Directory holding the compiled wasm bundle.
    pub pkg_dir: PathBuf,
    /// URL the page imports the bundle from.
    pub bundle_path: String,
}

impl Settings {
    /// Reads the process environment, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind_addr = value("BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::BindAddr {
                value: bind_addr.clone(),
                source,
            })?;

        let bundle_path = value("BUNDLE_PATH", DEFAULT_BUNDLE_PATH);
        if !is_safe_bundle_path(&bundle_path) {
            return Err(ConfigError::BundlePath(bundle_path));
        }

        Ok(Self {
            bind_addr,
            static_dir: value("STATIC_DIR", DEFAULT_STATIC_DIR).into(),
            pkg_dir: value("PKG_DIR", DEFAULT_PKG_DIR).into(),
            bundle_path,
        })
    }
}

/// The bundle path is written unescaped into an inline module script.
fn is_safe_bundle_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && !path.chars().any(|c| {
            matches!(c, '"' | '\'' | '`' | '<' | '>' | '\\') || c.is_whitespace() || c.is_control()
        })
}
