//! Server settings loaded via OrthoConfig.
//!
//! Values come from `CONTACTS_*` environment variables or matching CLI flags.
//! `PORT` and `DATABASE_URL` are honoured as fallbacks for platform
//! conventions.

use std::net::{IpAddr, SocketAddr};

use mockable::Env;
use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:3000"];
const PORT_FALLBACK_ENV: &str = "PORT";
const DATABASE_URL_FALLBACK_ENV: &str = "DATABASE_URL";

/// Errors raised while resolving settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The bind host is not an IP address.
    #[error("invalid host '{value}'; expected an IP address")]
    InvalidHost { value: String },
    /// A port value could not be parsed.
    #[error("invalid value for {name}='{value}'; expected a port number")]
    InvalidPort { name: &'static str, value: String },
    /// An allowed origin is not a bare `scheme://host[:port]` origin.
    #[error("invalid CORS origin '{value}'; expected scheme://host[:port]")]
    InvalidOrigin { value: String },
}

/// Configuration values controlling the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CONTACTS")]
pub struct ServerSettings {
    /// Interface address to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// PostgreSQL URL; the in-memory store is used when absent.
    pub database_url: Option<String>,
    /// Comma-separated browser origins allowed by CORS.
    pub allowed_origins: Option<String>,
    /// Maximum pooled database connections.
    pub db_max_connections: Option<u32>,
}

impl ServerSettings {
    /// Resolve the socket address, falling back to `PORT` then the default.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the host or fallback port is malformed.
    pub fn bind_addr<E: Env>(&self, env: &E) -> Result<SocketAddr, SettingsError> {
        let host = self.host.as_deref().unwrap_or(DEFAULT_HOST);
        let ip: IpAddr = host.parse().map_err(|_| SettingsError::InvalidHost {
            value: host.to_owned(),
        })?;
        let port = match self.port {
            Some(port) => port,
            None => match env.string(PORT_FALLBACK_ENV) {
                Some(raw) => raw.trim().parse().map_err(|_| SettingsError::InvalidPort {
                    name: PORT_FALLBACK_ENV,
                    value: raw,
                })?,
                None => DEFAULT_PORT,
            },
        };
        Ok(SocketAddr::new(ip, port))
    }

    /// Return the database URL, falling back to `DATABASE_URL`.
    pub fn database_url<E: Env>(&self, env: &E) -> Option<String> {
        self.database_url
            .clone()
            .or_else(|| env.string(DATABASE_URL_FALLBACK_ENV))
            .filter(|url| !url.trim().is_empty())
    }

    /// Return the configured pool size, if any.
    pub fn db_max_connections(&self) -> Option<u32> {
        self.db_max_connections
    }

    /// Parse and normalise the CORS allow-list.
    ///
    /// Wildcards are rejected because credentials are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidOrigin`] for any entry that is not a
    /// bare origin.
    pub fn allowed_origins(&self) -> Result<Vec<String>, SettingsError> {
        match self.allowed_origins.as_deref() {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(normalise_origin)
                .collect(),
            None => Ok(DEFAULT_ORIGINS.iter().map(|o| (*o).to_owned()).collect()),
        }
    }
}

fn normalise_origin(raw: &str) -> Result<String, SettingsError> {
    let invalid = || SettingsError::InvalidOrigin {
        value: raw.to_owned(),
    };
    let url = Url::parse(raw).map_err(|_| invalid())?;
    let origin = url.origin();
    if !origin.is_tuple() || !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }
    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err(invalid());
    }
    Ok(origin.ascii_serialization())
}
