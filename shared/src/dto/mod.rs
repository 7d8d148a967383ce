//! # Records
//!
//! - [`market`] - Market rows, trading pairs, recent trades, depth split
//! - [`asset`] - Wallet asset rows
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Enums**: lowercase strings using `#[serde(rename_all = "lowercase")]`
//! - **Times**: `chrono::NaiveTime` serialized as `HH:MM:SS`

pub mod asset;
pub mod market;

pub use asset::AssetRecord;
pub use market::{DepthSplit, MarketRecord, RecentTrade, TradePair, TradeSide};
