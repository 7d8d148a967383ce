//! # Shared Display Records
//!
//! Record types and formatting helpers shared by the core library and the
//! browser frontend. Nothing in here owns state: records are produced by the
//! mock generators in `lib-core` and rendered by `exchange-web`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Plain records
//!   - **[`dto::market`]**: Market rows, trading pairs, recent trades
//!   - **[`dto::asset`]**: Wallet asset rows
//! - **[`utils`]**: Number formatting used by every view
//!
//! ## Wire Format
//!
//! All records derive `Serialize`/`Deserialize` with snake_case field names so
//! they can be logged as JSON or handed to JavaScript through
//! `serde-wasm-bindgen` without a separate DTO layer.
//!
//! ```rust
//! use shared::dto::market::MarketRecord;
//! use shared::utils::format_percentage;
//!
//! let btc = MarketRecord::new("BTC", "Bitcoin", 45_230.5, 1_042.0, 2.36, 8.1e8);
//! assert_eq!(format_percentage(btc.change_percent), "+2.36%");
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
