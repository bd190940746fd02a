//! Application state and dependency injection.

mod admin_token;
mod cache;
mod config;

use lectern_postgres::PgClient;

pub use crate::service::admin_token::AdminToken;
pub use crate::service::cache::HealthCache;
pub use crate::service::config::{ServiceConfig, ServiceConfigBuilder};
pub use crate::{Error, Result};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    pg_client: PgClient,

    admin_token: AdminToken,
    health_cache: HealthCache,
}

impl ServiceState {
    /// Initializes application state from configuration.
    ///
    /// The Postgres pool is created lazily, so this does not require a
    /// reachable database.
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let service_state = Self {
            pg_client: config.connect_postgres()?,

            admin_token: config.admin_token(),
            health_cache: config.health_cache(),
        };

        Ok(service_state)
    }

    /// Returns the Postgres client.
    #[inline]
    pub fn pg_client(&self) -> &PgClient {
        &self.pg_client
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(pg_client: PgClient);

impl_di!(admin_token: AdminToken);
impl_di!(health_cache: HealthCache);
