//! # Centralized Error Handling
//!
//! This module defines the error type [`AppError`] used across the core library.
//! It follows the `thiserror` pattern for ergonomic error handling.
//!
//! ## Error Categories
//!
//! 1. **User input** - surfaced as a notice next to the form
//!    - [`Validation`](AppError::Validation)
//!    - [`UnknownPair`](AppError::UnknownPair)
//!
//! 2. **Platform** - the browser rejected or threw during a call
//!    - [`InstallPrompt`](AppError::InstallPrompt) → alert, state left unchanged
//!
//! 3. **Lifecycle misuse** - the caller asked for something the state does not allow
//!    - [`NoPendingUpdate`](AppError::NoPendingUpdate)
//!    - [`ShutDown`](AppError::ShutDown)
//!
//! 4. **Startup**
//!    - [`Config`](AppError::Config)
//!
//! Some outcomes look like failures but are expected branches and are *not* errors:
//! no install prompt captured (the UI shows the manual guide) and the user declining
//! the native install dialog.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn require_amount(amount: &str) -> Result<f64> {
//!     amount
//!         .parse()
//!         .map_err(|_| AppError::Validation("Enter an amount to trade".to_string()))
//! }
//!
//! assert!(require_amount("x").is_err());
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Error type covering all fallible core operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Invalid form input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A trading pair that is not in the pair list.
    #[error("Unknown trading pair: {0}")]
    UnknownPair(String),

    /// The native install confirmation threw instead of resolving.
    #[error("Install prompt failed: {0}")]
    InstallPrompt(String),

    /// "Update now" with no refresh available or with the update already applied.
    #[error("No pending update to apply")]
    NoPendingUpdate,

    /// The lifecycle context was torn down on page unload.
    #[error("Lifecycle context has been shut down")]
    ShutDown,

    /// Configuration rejected at startup.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get a user-friendly error message.
    ///
    /// Input errors are shown as-is; everything else gets a short generic notice.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::UnknownPair(pair) => format!("{} is not available", pair),
            AppError::InstallPrompt(_) => "Installation failed, check the console for details".to_string(),
            AppError::NoPendingUpdate => "No update is waiting to be installed".to_string(),
            AppError::ShutDown | AppError::Config(_) => "The app is not ready".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            AppError::Validation("Enter an amount".into()).to_string(),
            "Validation error: Enter an amount"
        );
        assert_eq!(AppError::NoPendingUpdate.to_string(), "No pending update to apply");
    }

    #[test]
    fn test_user_message_hides_platform_details() {
        let err = AppError::InstallPrompt("DOMException: prompt() already called".into());
        assert!(!err.user_message().contains("DOMException"));
        assert_eq!(AppError::Validation("Enter an amount".into()).user_message(), "Enter an amount");
    }
}
