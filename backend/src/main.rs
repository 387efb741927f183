//! Backend entry-point: loads settings, prepares storage, and serves the
//! contacts REST API.

mod server;

use std::ffi::OsString;
use std::io;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use contact_backend::inbound::http::health::HealthState;
use contact_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use server::{ServerConfig, ServerSettings, create_server};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
}

async fn connect_database(
    database_url: String,
    max_connections: Option<u32>,
) -> io::Result<DbPool> {
    let migration_url = database_url.clone();
    let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&migration_url))
        .await
        .map_err(io::Error::other)?
        .map_err(io::Error::other)?;
    info!(applied, "database schema up to date");

    let mut config = PoolConfig::new(database_url);
    if let Some(max) = max_connections {
        config = config.with_max_size(max);
    }
    DbPool::new(config).await.map_err(io::Error::other)
}

async fn build_config(settings: &ServerSettings) -> io::Result<ServerConfig> {
    let env = DefaultEnv::new();
    let bind_addr = settings.bind_addr(&env).map_err(io::Error::other)?;
    let origins = settings.allowed_origins().map_err(io::Error::other)?;
    let config = ServerConfig::new(bind_addr, origins);

    match settings.database_url(&env) {
        Some(url) => {
            let pool = connect_database(url, settings.db_max_connections()).await?;
            Ok(config.with_db_pool(pool))
        }
        None => {
            warn!("no database configured; contacts are kept in memory");
            Ok(config)
        }
    }
}

/// Wait for SIGINT or SIGTERM (Ctrl-C elsewhere) and name the signal.
async fn shutdown_signal() -> io::Result<&'static str> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut interrupt = signal(SignalKind::interrupt())?;
        let mut terminate = signal(SignalKind::terminate())?;
        tokio::select! {
            _ = interrupt.recv() => Ok("SIGINT"),
            _ = terminate.recv() => Ok("SIGTERM"),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await.map(|()| "ctrl-c")
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    init_tracing();

    let settings = ServerSettings::load_from_iter(std::env::args_os().collect::<Vec<OsString>>())
        .map_err(|err| io::Error::other(err.to_string()))?;
    let config = build_config(&settings).await?;
    info!(
        bind_addr = %config.bind_addr(),
        postgres = config.uses_database(),
        "starting contact service"
    );

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let handle = server.handle();
    actix_web::rt::spawn(async move {
        match shutdown_signal().await {
            Ok(signal) => info!(signal, "shutdown requested; draining connections"),
            Err(err) => {
                warn!(error = %err, "signal handlers unavailable; graceful shutdown disabled");
                return;
            }
        }
        health_state.begin_draining();
        handle.stop(true).await;
    });
    server.await
}
