//! Service configuration loaded via OrthoConfig.
//!
//! Values are layered from defaults, a configuration file, `USER_REGISTRY_*`
//! environment variables and command-line flags.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_DB_CONNECTION_TIMEOUT_SECS: u64 = 30;

/// Runtime settings for the user registry service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_REGISTRY")]
pub struct ServiceSettings {
    /// Address the HTTP listener binds to.
    pub bind_host: Option<IpAddr>,
    /// TCP port for the HTTP listener.
    pub port: Option<u16>,
    /// PostgreSQL connection URL. Without it the service keeps users in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Seconds to wait for a pooled connection before failing the request.
    pub db_connection_timeout_secs: Option<u64>,
    /// Apply embedded migrations on startup.
    #[ortho_config(default = true)]
    pub run_migrations: bool,
}

impl ServiceSettings {
    /// Socket address for the HTTP listener.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.bind_host.unwrap_or(DEFAULT_BIND_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Maximum pool size.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    /// Pool checkout timeout.
    pub fn db_connection_timeout(&self) -> Duration {
        Duration::from_secs(
            self.db_connection_timeout_secs
                .unwrap_or(DEFAULT_DB_CONNECTION_TIMEOUT_SECS),
        )
    }
}
