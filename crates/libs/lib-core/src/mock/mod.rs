//! # Mock Data Generators
//!
//! Everything the views display is produced here from a seeded RNG. There is no
//! market data feed; [`MarketSource`] marks where one would plug in.
//!
//! - [`market`] - market rows: seed → snapshot, tick → perturbed rows
//! - [`trades`] - trading pairs, recent fills, order book split
//! - [`assets`] - wallet holdings
//!
//! ## Timers
//!
//! Generators are pure; the periodic timer that drives [`MarketSource::tick`] is
//! owned by the view that displays the rows and is cleared when that view unmounts.

pub mod assets;
pub mod market;
pub mod trades;

use shared::dto::MarketRecord;

pub use market::{MarketSummary, MockMarket, SymbolInfo, HOME_SYMBOLS, MARKET_SYMBOLS};

/// A source of market rows.
///
/// `snapshot` regenerates the whole set (view mount); `tick` moves the rows the
/// view already holds. Implementations must keep the symbol set, its order and its
/// cardinality unchanged across ticks.
pub trait MarketSource {
    fn snapshot(&mut self) -> Vec<MarketRecord>;
    fn tick(&mut self, records: &mut [MarketRecord]);
}
