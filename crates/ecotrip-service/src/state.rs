//! Application state shared by every handler.
//!
//! Catalog, factor table, and credit configuration are loaded once at startup
//! and never mutated afterwards, so handlers clone an `Arc` and compute
//! independently; no locking is needed.

use std::env;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use ecotrip_lib::{CreditConfig, FactorTable, Result, RouteCatalog};

#[derive(Debug)]
struct Inner {
    catalog: RouteCatalog,
    factors: FactorTable,
    credits: CreditConfig,
    /// Artificial response delay simulating asynchronous work, applied in the
    /// handler layer only. Cancelled automatically when a request is dropped.
    response_delay: Duration,
}

/// Shared, read-only application state.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

impl AppState {
    /// Build state from explicit parts (used by tests).
    pub fn new(
        catalog: RouteCatalog,
        factors: FactorTable,
        credits: CreditConfig,
        response_delay: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                catalog,
                factors,
                credits,
                response_delay,
            }),
        }
    }

    /// Load state from the environment.
    ///
    /// `ECOTRIP_ROUTES`, `ECOTRIP_FACTORS`, and `ECOTRIP_CREDITS` name JSON
    /// files overriding the built-in catalog, factor table, and credit
    /// configuration. `ECOTRIP_RESPONSE_DELAY_MS` enables the artificial
    /// response delay (absent or 0 disables it).
    pub fn from_env() -> Result<Self> {
        let catalog = match env::var_os("ECOTRIP_ROUTES") {
            Some(path) => RouteCatalog::from_path(Path::new(&path))?,
            None => RouteCatalog::builtin().clone(),
        };
        let factors = match env::var_os("ECOTRIP_FACTORS") {
            Some(path) => FactorTable::from_path(Path::new(&path))?,
            None => FactorTable::builtin(),
        };
        let credits = match env::var_os("ECOTRIP_CREDITS") {
            Some(path) => CreditConfig::from_path(Path::new(&path))?,
            None => CreditConfig::default(),
        };
        let response_delay = env::var("ECOTRIP_RESPONSE_DELAY_MS")
            .ok()
            .and_then(|ms| ms.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::ZERO);

        Ok(Self::new(catalog, factors, credits, response_delay))
    }

    pub fn catalog(&self) -> &RouteCatalog {
        &self.inner.catalog
    }

    pub fn factors(&self) -> &FactorTable {
        &self.inner.factors
    }

    pub fn credits(&self) -> &CreditConfig {
        &self.inner.credits
    }

    pub fn response_delay(&self) -> Duration {
        self.inner.response_delay
    }
}
