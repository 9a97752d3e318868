//! Application settings loaded via OrthoConfig.
//!
//! Optional values fall back to defaults in their accessors, so an empty
//! environment serves the current directory on port 8080.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_USERS_FILE: &str = "users.json";
const DEFAULT_GUESTS_FILE: &str = "invites.json";
const DEFAULT_BANNER_FILE: &str = "photo_eptv.png";

/// The configured bind address does not parse as `host:port`.
#[derive(Debug, thiserror::Error)]
#[error("invalid bind address '{value}': {source}")]
pub struct BindAddrError {
    value: String,
    #[source]
    source: std::net::AddrParseError,
}

/// Server and storage settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "GUEST_DESK")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// Directory holding the user and guest files.
    pub data_dir: Option<PathBuf>,
    /// User file name inside the data directory.
    pub users_file: Option<String>,
    /// Guest file name inside the data directory.
    pub guests_file: Option<String>,
    /// Decorative banner image name inside the data directory.
    pub banner_file: Option<String>,
    /// Create the data directory on startup when it does not exist.
    #[ortho_config(default = true)]
    pub create_data_dir: bool,
}

impl AppSettings {
    /// Parsed bind address, defaulting to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, BindAddrError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| BindAddrError {
            value: value.to_owned(),
            source,
        })
    }

    /// Data directory, defaulting to the working directory.
    pub fn data_dir(&self) -> &Path {
        self.data_dir.as_deref().unwrap_or_else(|| Path::new("."))
    }

    /// User file name, defaulting to `users.json`.
    pub fn users_file(&self) -> &str {
        self.users_file.as_deref().unwrap_or(DEFAULT_USERS_FILE)
    }

    /// Guest file name, defaulting to `invites.json`.
    pub fn guests_file(&self) -> &str {
        self.guests_file.as_deref().unwrap_or(DEFAULT_GUESTS_FILE)
    }

    /// Banner image name, defaulting to `photo_eptv.png`.
    pub fn banner_file(&self) -> &str {
        self.banner_file.as_deref().unwrap_or(DEFAULT_BANNER_FILE)
    }
}
