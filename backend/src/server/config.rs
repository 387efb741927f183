//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use contact_backend::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) allowed_origins: Vec<String>,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration bound to `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, allowed_origins: Vec<String>) -> Self {
        Self {
            bind_addr,
            allowed_origins,
            db_pool: None,
        }
    }

    /// Attach a database connection pool.
    ///
    /// Without one the server keeps contacts in memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Return whether contacts are persisted in PostgreSQL.
    #[must_use]
    pub fn uses_database(&self) -> bool {
        self.db_pool.is_some()
    }
}
