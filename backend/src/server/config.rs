//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use actix_web::cookie::{Key, SameSite};
use url::Url;

use crate::domain::EmployeeId;
use crate::outbound::successfactors::SuccessFactorsCredentials;

/// Upstream directory settings; absent in credential-less dev runs.
#[derive(Clone)]
pub struct DirectoryConfig {
    /// OData service root, e.g. `https://api44.sapsf.com/odata/v2/`.
    pub base_url: Url,
    /// Basic-auth credentials.
    pub credentials: SuccessFactorsCredentials,
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) admin_seed: Vec<EmployeeId>,
    pub(crate) directory: Option<DirectoryConfig>,
}

impl ServerConfig {
    /// Construct a server configuration using application preferences.
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, same_site: SameSite, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            admin_seed: Vec::new(),
            directory: None,
        }
    }

    /// Seed the admin allow-list with the given identifiers.
    #[must_use]
    pub fn with_admin_seed(mut self, seed: Vec<EmployeeId>) -> Self {
        self.admin_seed = seed;
        self
    }

    /// Attach upstream directory settings.
    ///
    /// Without them the server falls back to the fixture directory, which is
    /// only useful for local development and tests.
    #[must_use]
    pub fn with_directory(mut self, directory: DirectoryConfig) -> Self {
        self.directory = Some(directory);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
