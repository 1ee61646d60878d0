//! the `serve` subcommand - runs the http server.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::Args;
use color_eyre::eyre::{Context, Result};
use lms_db::LmsDb;
use lms_types::Config;
use tokio::net::TcpListener;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use super::{load_config_file, parse_database_url};
use crate::create_app;

/// run the lms http server
#[derive(Args, Debug)]
pub struct ServeCommand {
    /// path to config file (toml format)
    #[arg(short, long, env = "LMS_CONFIG")]
    config: Option<PathBuf>,

    /// database url (sqlite:// or postgres://)
    #[arg(long, env = "LMS_DATABASE_URL")]
    database_url: Option<String>,

    /// address to listen on
    #[arg(long, env = "LMS_LISTEN_ADDR")]
    listen_addr: Option<String>,

    /// origin allowed to make cross-origin requests
    #[arg(long, env = "LMS_CORS_ORIGIN")]
    cors_origin: Option<String>,

    /// log level (trace, debug, info, warn, error)
    #[arg(long, env = "LMS_LOG_LEVEL")]
    log_level: Option<String>,
}

fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

impl ServeCommand {
    /// convert cli arguments into a config struct, merging with config file if present.
    ///
    /// priority order: defaults -> config file -> cli flags
    fn into_config(self) -> Result<Config> {
        let mut config = load_config_file(self.config.as_deref())?.unwrap_or_default();

        if let Some(db_url) = self.database_url {
            config.database = parse_database_url(&db_url)?;
        }
        if let Some(listen_addr) = self.listen_addr {
            config.listen_addr = listen_addr;
        }
        if let Some(origin) = self.cors_origin {
            config.cors_allowed_origin = origin;
        }
        if let Some(log_level) = self.log_level {
            config.log_level = log_level;
        }

        Ok(config)
    }

    /// run the serve command
    pub async fn run(self) -> Result<()> {
        let config = self.into_config()?;

        let subscriber = FmtSubscriber::builder()
            .with_max_level(parse_level(&config.log_level))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;

        info!("Starting lms...");
        info!("Database: {}", config.database.connection_string);
        info!("Listen address: {}", config.listen_addr);
        info!("CORS origin: {}", config.cors_allowed_origin);

        // ensure parent directory exists for sqlite databases
        if config.database.db_type == "sqlite" {
            let db_path = Path::new(&config.database.connection_string);
            if let Some(parent) = db_path.parent()
                && !parent.as_os_str().is_empty()
                && !parent.exists()
            {
                info!("Creating database directory: {:?}", parent);
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create database directory: {:?}", parent)
                })?;
            }
        }

        let db = LmsDb::new(&config)
            .await
            .context("failed to initialize database")?;

        let addr: SocketAddr = config
            .listen_addr
            .parse()
            .context("invalid listen address")?;

        let app = create_app(db, config);

        info!("Starting HTTP server on {}", addr);
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("server error")?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
