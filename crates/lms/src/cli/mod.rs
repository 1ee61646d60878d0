//! cli subcommands for lms.
//!
//! - `lms serve` - run the http server
//! - `lms universities create` - add a university
//! - `lms universities list` - list universities
//! - `lms admins create` / `lms admins list` - bootstrap admin accounts

mod admins;
pub mod serve;
mod universities;

pub use admins::AdminsCommand;
pub use serve::ServeCommand;
pub use universities::UniversitiesCommand;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Context, Result, bail};
use lms_db::LmsDb;
use lms_types::{Config, DatabaseConfig};
use tracing::debug;

/// default config file search paths (in order of priority).
const CONFIG_SEARCH_PATHS: &[&str] = &["/etc/lms/config.toml", "./config.toml"];

/// lms - multi-tenant learning management system backend
#[derive(Parser, Debug)]
#[command(name = "lms")]
#[command(about = "Multi-tenant learning management system backend", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// run the http server
    Serve(ServeCommand),

    /// manage universities
    #[command(subcommand)]
    Universities(UniversitiesCommand),

    /// manage admin accounts
    #[command(subcommand)]
    Admins(AdminsCommand),
}

/// database selection shared by the data subcommands
///
/// resolves the database the same way `serve` does, so both talk to the
/// same store.
#[derive(Args, Debug)]
pub struct DbArgs {
    /// path to config file (toml format)
    #[arg(short, long, env = "LMS_CONFIG")]
    config: Option<PathBuf>,

    /// database url (sqlite:// or postgres://), overrides the config file
    #[arg(long, env = "LMS_DATABASE_URL")]
    database_url: Option<String>,
}

impl DbArgs {
    /// the database section after defaults, config file and flags.
    fn database_config(&self) -> Result<DatabaseConfig> {
        if let Some(url) = &self.database_url {
            return parse_database_url(url);
        }
        let config = load_config_file(self.config.as_deref())?.unwrap_or_default();
        Ok(config.database)
    }

    /// connect and migrate.
    pub async fn connect(&self) -> Result<LmsDb> {
        let config = Config {
            database: self.database_config()?,
            ..Config::default()
        };
        LmsDb::new(&config)
            .await
            .context("failed to open database")
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {:?}", path))?;
    toml::from_str(&content).with_context(|| format!("failed to parse config file: {:?}", path))
}

/// find and load the config file, returning none if there is none.
///
/// an explicit path must exist; otherwise the search paths are tried in order.
pub(crate) fn load_config_file(config_path: Option<&Path>) -> Result<Option<Config>> {
    if let Some(path) = config_path {
        return read_config(path).map(Some);
    }

    for path_str in CONFIG_SEARCH_PATHS {
        let path = Path::new(path_str);
        if path.exists() {
            debug!("Found config file at {:?}", path);
            return read_config(path).map(Some);
        }
    }

    Ok(None)
}

/// parse a database url into a database config.
pub(crate) fn parse_database_url(db_url: &str) -> Result<DatabaseConfig> {
    let parsed =
        url::Url::parse(db_url).with_context(|| format!("invalid database URL: {}", db_url))?;

    match parsed.scheme() {
        "postgres" | "postgresql" => Ok(DatabaseConfig {
            db_type: "postgres".to_string(),
            connection_string: db_url.to_string(),
        }),
        "sqlite" => Ok(DatabaseConfig {
            db_type: "sqlite".to_string(),
            connection_string: parsed.path().to_string(),
        }),
        scheme => bail!(
            "unsupported database scheme '{}', expected 'sqlite' or 'postgres'",
            scheme
        ),
    }
}
