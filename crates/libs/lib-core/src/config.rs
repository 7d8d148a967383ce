//! # Application Configuration
//!
//! Timing and deployment settings for the exchange frontend.
//!
//! The browser build has no environment at runtime, so [`AppConfig::default`] holds
//! the production values and the web crate only overrides the base path from a
//! compile-time variable.
//!
//! ```rust
//! use lib_core::config::AppConfig;
//!
//! let config = AppConfig::with_base_path("/pwa/").unwrap();
//! assert_eq!(config.router_base(), "/pwa");
//! assert_eq!(config.market_tick_ms, 3_000);
//! ```

use crate::error::{AppError, Result};

/// Frontend configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Deployment prefix, `/` for root hosting.
    pub base_path: String,

    /// Period of the mock price perturbation timer on the market views.
    pub market_tick_ms: u64,

    /// Delay between "new version fetched" and the update prompt appearing.
    pub update_prompt_delay_ms: u64,

    /// Period of the background service-worker update check.
    pub update_check_interval_ms: u64,

    /// USD → CNY rate for the secondary total on the assets page.
    pub fiat_rate: f64,

    /// Service worker script, relative to the base path.
    pub service_worker_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_path: "/".to_string(),
            market_tick_ms: 3_000,
            update_prompt_delay_ms: crate::pwa::update::UPDATE_PROMPT_DELAY_MS,
            update_check_interval_ms: crate::pwa::update::UPDATE_CHECK_INTERVAL_MS,
            fiat_rate: 7.2,
            service_worker_path: "sw.js".to_string(),
        }
    }
}

impl AppConfig {
    /// Default config hosted under `base_path`.
    pub fn with_base_path(base_path: &str) -> Result<Self> {
        let config = Self {
            base_path: base_path.to_string(),
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !self.base_path.starts_with('/') {
            return Err(AppError::Config(format!(
                "base_path must start with '/', got {:?}",
                self.base_path
            )));
        }
        if self.market_tick_ms == 0 || self.update_check_interval_ms == 0 {
            return Err(AppError::Config("timer periods must be greater than zero".to_string()));
        }
        if !(self.fiat_rate.is_finite() && self.fiat_rate > 0.0) {
            return Err(AppError::Config("fiat_rate must be a positive number".to_string()));
        }
        Ok(())
    }

    /// Base for the router: empty for root hosting, otherwise the prefix without
    /// a trailing slash.
    pub fn router_base(&self) -> &str {
        self.base_path.trim_end_matches('/')
    }

    /// Absolute URL of the service worker script.
    pub fn service_worker_url(&self) -> String {
        format!("{}/{}", self.router_base(), self.service_worker_path.trim_start_matches('/'))
    }

    /// Scope the service worker registers for.
    pub fn service_worker_scope(&self) -> String {
        format!("{}/", self.router_base())
    }
}
