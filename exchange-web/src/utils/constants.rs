//! Application constants

/// Deployment prefix baked in at build time, `/` for root hosting.
pub const BASE_PATH: &str = match option_env!("EXCHANGE_BASE_PATH") {
    Some(path) => path,
    None => "/",
};

/// Splash element in `index.html`, hidden once the app mounts.
pub const LOADING_ELEMENT_ID: &str = "app-loading";
