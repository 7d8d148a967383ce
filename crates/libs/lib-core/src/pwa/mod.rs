//! # Installable-App Lifecycle
//!
//! Install and update state for the installable web app, free of browser types.
//! The web crate binds these to `beforeinstallprompt`, `appinstalled` and the
//! service worker registration; everything here runs and is tested natively.

pub mod environment;
pub mod events;
pub mod install;
pub mod lifecycle;
pub mod update;

pub use environment::{Browser, Device, Environment, InstallGuide};
pub use events::PlatformEvent;
pub use install::{InstallAction, InstallFlow, InstallStatus, PromptOutcome};
pub use lifecycle::{Dispatch, LifecycleContext, LifecycleSnapshot, SubscriptionId};
pub use update::{UpdateFlow, UpdateStatus, UPDATE_CHECK_INTERVAL_MS, UPDATE_PROMPT_DELAY_MS};
