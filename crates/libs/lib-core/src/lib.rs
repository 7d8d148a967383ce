//! # Core Library
//!
//! Mock market data, view models, navigation rules and the installable-app
//! lifecycle for the exchange frontend.

pub mod config;
pub mod error;
pub mod mock;
pub mod nav;
pub mod portfolio;
pub mod pwa;
pub mod trade;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use nav::{NavigationShell, Route};
pub use portfolio::Portfolio;
pub use trade::TradeForm;
