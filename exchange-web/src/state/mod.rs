//! Reactive application state

pub mod market;
pub mod pwa;
