//! User registry entry-point: loads settings, prepares persistence and serves
//! the REST API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use user_registry::inbound::http::health::HealthState;
use user_registry::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use user_registry::settings::ServiceSettings;

use server::{ServerConfig, create_server};

async fn connect_database(settings: &ServiceSettings, url: &str) -> std::io::Result<DbPool> {
    if settings.run_migrations {
        run_pending_migrations(url)
            .await
            .map_err(|err| std::io::Error::other(err.to_string()))?;
    } else {
        info!("skipping database migrations");
    }

    let config = PoolConfig::new(url)
        .with_max_size(settings.db_max_connections())
        .with_connection_timeout(settings.db_connection_timeout());
    DbPool::new(config)
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServiceSettings::load_from_iter(std::env::args_os())
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;

    let mut config = ServerConfig::new(settings.bind_addr());
    if let Some(url) = settings.database_url() {
        let pool = connect_database(&settings, url).await?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    info!("server stopped");
    result
}
