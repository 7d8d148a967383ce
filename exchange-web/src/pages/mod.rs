//! Page modules - one per route

pub mod assets;
pub mod home;
pub mod install;
pub mod market;
pub mod not_found;
pub mod trade;

pub use assets::AssetsPage;
pub use home::HomePage;
pub use install::InstallPage;
pub use market::MarketPage;
pub use not_found::NotFoundPage;
pub use trade::TradePage;
