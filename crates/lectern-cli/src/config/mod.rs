//! CLI configuration management.
//!
//! ```text
//! Cli
//! ├── server: ServerConfig         # Host, port, TLS, shutdown
//! ├── middleware: MiddlewareConfig # CORS, OpenAPI, timeouts, viewer
//! └── service: ServiceConfig       # Postgres, admin token, health cache
//! ```
//!
//! All configuration can be provided via CLI arguments or environment variables.
//! Use `--help` to see all available options.

mod middleware;
mod server;

use std::process;

use anyhow::Context;
use clap::Parser;
use lectern_server::service::ServiceConfig;
pub use middleware::MiddlewareConfig;
use serde::{Deserialize, Serialize};
pub use server::ServerConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::{TRACING_TARGET_CONFIG, TRACING_TARGET_SERVER_STARTUP};

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(name = "lectern")]
#[command(about = "Lectern course catalogue and share link server")]
#[command(version)]
pub struct Cli {
    /// Server network and lifecycle configuration.
    #[clap(flatten)]
    pub server: ServerConfig,

    /// HTTP middleware configuration (CORS, OpenAPI, timeouts, viewer).
    #[clap(flatten)]
    pub middleware: MiddlewareConfig,

    /// Database, admin token and health check configuration.
    #[clap(flatten)]
    pub service: ServiceConfig,
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    /// Loads environment variables from .env file if the dotenv feature is enabled.
    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Initializes tracing with environment-based filtering.
    ///
    /// The level is read from `RUST_LOG` and defaults to `info`.
    pub fn init_tracing() -> anyhow::Result<()> {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new("info"))
            .context("failed to create log filter")?;

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
            .context("failed to initialize tracing")?;

        Ok(())
    }

    /// Validates all configuration values.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.server
            .validate()
            .context("invalid server configuration")?;
        self.service
            .validate()
            .context("invalid service configuration")?;
        Ok(())
    }

    /// Logs configuration (no sensitive information).
    pub fn log(&self) {
        Self::log_build_info();
        self.server.log();
        self.middleware.log();

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            postgres_url = %self.service.postgres_config.database_url_masked(),
            postgres_max_connections = self.service.postgres_config.postgres_max_connections,
            admin_routes_enabled = self.service.admin_token().is_configured(),
            health_cache_ttl_secs = self.service.health_cache_ttl_secs,
            "Service configuration"
        );
    }

    /// Logs build information at debug level.
    fn log_build_info() {
        tracing::debug!(
            target: TRACING_TARGET_SERVER_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            arch = std::env::consts::ARCH,
            os = std::env::consts::OS,
            features = ?Self::enabled_features(),
            "Build information"
        );
    }

    /// Returns a list of enabled compile-time features.
    fn enabled_features() -> Vec<&'static str> {
        [
            cfg!(feature = "tls").then_some("tls"),
            cfg!(feature = "dotenv").then_some("dotenv"),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_arguments() -> anyhow::Result<()> {
        let cli = Cli::try_parse_from([
            "lectern",
            "--port",
            "9090",
            "--admin-token",
            "s3cret",
            "--static-dir",
            "./dist",
            "--request-timeout",
            "60",
        ])?;

        assert_eq!(cli.server.port, 9090);
        assert!(cli.service.admin_token().matches("s3cret"));
        assert_eq!(
            cli.middleware.spa.static_dir(),
            Some(std::path::Path::new("./dist"))
        );
        assert_eq!(cli.middleware.recovery.request_timeout, 60);
        cli.validate()?;

        Ok(())
    }

    #[test]
    fn rejects_invalid_values() -> anyhow::Result<()> {
        let cli = Cli::try_parse_from(["lectern", "--port", "80"])?;
        assert!(cli.validate().is_err());

        let cli = Cli::try_parse_from(["lectern", "--health-cache-ttl-secs", "0"])?;
        assert!(cli.validate().is_err());

        Ok(())
    }
}
