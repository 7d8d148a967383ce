//! # PWA Resource Check
//!
//! Validates the icon and screenshot files a release of the exchange PWA ships in
//! its public directory.
//!
//! ## Structure
//!
//! - [`resources`] - the expected file list and declared sizes
//! - [`png`] - PNG header parsing (dimensions only)
//! - [`check`] - per-file inspection and the pass/fail rule
//! - [`report`] - human-readable rendering
//!
//! ## Pass Rule
//!
//! The check fails when a required file is missing or a required PNG does not have
//! its declared size. Missing optional files, missing screenshots, unreadable
//! dimensions and screenshot ratio mismatches are warnings.
//!
//! ```rust,no_run
//! use check_pwa_resources::check::check_public_dir;
//!
//! let report = check_public_dir("exchange-web/public").unwrap();
//! std::process::exit(if report.passed() { 0 } else { 1 });
//! ```

pub mod check;
pub mod png;
pub mod report;
pub mod resources;

pub use check::{check_public_dir, CheckReport};
