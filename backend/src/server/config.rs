//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::cookie::Key;
use cap_std::fs::Dir;

/// Where the user, guest and banner files live.
pub struct StorageConfig {
    pub(crate) dir: Arc<Dir>,
    pub(crate) users_file: String,
    pub(crate) guests_file: String,
    pub(crate) banner_file: String,
}

impl StorageConfig {
    /// Files named `users_file`, `guests_file` and `banner_file` inside `dir`.
    #[must_use]
    pub fn new(
        dir: Dir,
        users_file: impl Into<String>,
        guests_file: impl Into<String>,
        banner_file: impl Into<String>,
    ) -> Self {
        Self {
            dir: Arc::new(dir),
            users_file: users_file.into(),
            guests_file: guests_file.into(),
            banner_file: banner_file.into(),
        }
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) storage: StorageConfig,
}

impl ServerConfig {
    /// Construct a server configuration from session and storage settings.
    #[must_use]
    pub fn new(
        key: Key,
        cookie_secure: bool,
        bind_addr: SocketAddr,
        storage: StorageConfig,
    ) -> Self {
        Self {
            key,
            cookie_secure,
            bind_addr,
            storage,
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
