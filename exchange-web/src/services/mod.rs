//! Browser services

pub mod pwa;
