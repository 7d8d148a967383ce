//! # Mock Market Rows
//!
//! Random-walk prices for the home and market pages.
//!
//! ## Generation
//!
//! - base price uniform in `[10_000, 60_000)`
//! - opening change uniform in `[-1_000, 1_000)`
//! - 24h volume uniform in `[0, 1e9)`
//!
//! ## Tick
//!
//! Each tick moves every price by a uniform delta in `[-50, 50)` and floors it at
//! [`PRICE_FLOOR`]. The change fields then describe that single move.
//!
//! ```rust
//! use lib_core::mock::{MarketSource, MockMarket, HOME_SYMBOLS};
//!
//! let mut market = MockMarket::from_seed(7, HOME_SYMBOLS);
//! let mut rows = market.snapshot();
//! market.tick(&mut rows);
//! assert_eq!(rows.len(), HOME_SYMBOLS.len());
//! ```

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use shared::dto::MarketRecord;

use super::MarketSource;

/// Lowest price a tick can push a row to.
pub const PRICE_FLOOR: f64 = 1_000.0;

/// Largest absolute move of a single tick.
pub const MAX_TICK_DELTA: f64 = 50.0;

/// Catalog entry: ticker and display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolInfo {
    pub symbol: &'static str,
    pub name: &'static str,
}

const fn info(symbol: &'static str, name: &'static str) -> SymbolInfo {
    SymbolInfo { symbol, name }
}

/// Rows on the home page table.
pub const HOME_SYMBOLS: &[SymbolInfo] = &[
    info("BTC", "Bitcoin"),
    info("ETH", "Ethereum"),
    info("BNB", "BNB"),
    info("SOL", "Solana"),
    info("XRP", "XRP"),
    info("DOGE", "Dogecoin"),
    info("ADA", "Cardano"),
    info("DOT", "Polkadot"),
];

/// Rows on the market page list.
pub const MARKET_SYMBOLS: &[SymbolInfo] = &[
    info("BTC", "Bitcoin"),
    info("ETH", "Ethereum"),
    info("BNB", "BNB"),
    info("SOL", "Solana"),
    info("XRP", "XRP"),
    info("DOGE", "Dogecoin"),
    info("ADA", "Cardano"),
    info("DOT", "Polkadot"),
    info("LTC", "Litecoin"),
    info("LINK", "Chainlink"),
];

/// Generate a fresh row for every catalog entry.
pub fn generate_markets<R: Rng + ?Sized>(rng: &mut R, catalog: &[SymbolInfo]) -> Vec<MarketRecord> {
    catalog
        .iter()
        .map(|item| {
            let price = rng.random_range(10_000.0..60_000.0);
            let change = rng.random_range(-1_000.0..1_000.0);
            let volume = rng.random_range(0.0..1_000_000_000.0);
            MarketRecord::new(item.symbol, item.name, price, change, change / price * 100.0, volume)
        })
        .collect()
}

/// Move one row by `delta`, flooring the price, and recompute the change fields.
pub fn apply_price_delta(record: &mut MarketRecord, delta: f64) {
    let old_price = record.price;
    let new_price = (old_price + delta).max(PRICE_FLOOR);
    record.price = new_price;
    record.change = new_price - old_price;
    record.change_percent = if old_price > 0.0 {
        (new_price - old_price) / old_price * 100.0
    } else {
        0.0
    };
}

/// Apply one random tick to every row.
pub fn perturb_markets<R: Rng + ?Sized>(rng: &mut R, records: &mut [MarketRecord]) {
    for record in records.iter_mut() {
        let delta = rng.random_range(-MAX_TICK_DELTA..MAX_TICK_DELTA);
        apply_price_delta(record, delta);
    }
}

/// Seeded [`MarketSource`] over a fixed catalog.
#[derive(Debug, Clone)]
pub struct MockMarket {
    rng: SmallRng,
    catalog: &'static [SymbolInfo],
}

impl MockMarket {
    pub fn from_seed(seed: u64, catalog: &'static [SymbolInfo]) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            catalog,
        }
    }

    pub fn catalog(&self) -> &'static [SymbolInfo] {
        self.catalog
    }
}

impl MarketSource for MockMarket {
    fn snapshot(&mut self) -> Vec<MarketRecord> {
        let rows = generate_markets(&mut self.rng, self.catalog);
        tracing::debug!(rows = rows.len(), "Generated mock market snapshot");
        rows
    }

    fn tick(&mut self, records: &mut [MarketRecord]) {
        perturb_markets(&mut self.rng, records);
    }
}

/// Header figures of the home page.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSummary {
    /// Σ price × volume
    pub total_market_cap: f64,
    pub gainers: usize,
    pub losers: usize,
    /// Largest `change_percent`, `None` for an empty table.
    pub top_gain_percent: Option<f64>,
}

impl MarketSummary {
    pub fn from_records(records: &[MarketRecord]) -> Self {
        Self {
            total_market_cap: records.iter().map(MarketRecord::market_cap).sum(),
            gainers: records.iter().filter(|r| r.change_percent > 0.0).count(),
            losers: records.iter().filter(|r| r.change_percent < 0.0).count(),
            top_gain_percent: records
                .iter()
                .map(|r| r.change_percent)
                .fold(None, |best: Option<f64>, pct| Some(best.map_or(pct, |b| b.max(pct)))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    fn rows(seed: u64, catalog: &[SymbolInfo]) -> Vec<MarketRecord> {
        generate_markets(&mut StdRng::seed_from_u64(seed), catalog)
    }

    #[test]
    fn test_generate_ranges() {
        for record in rows(1, MARKET_SYMBOLS) {
            assert!((10_000.0..60_000.0).contains(&record.price), "price {}", record.price);
            assert!((-1_000.0..1_000.0).contains(&record.change));
            assert!((0.0..1e9).contains(&record.volume));
            let expected = record.change / record.price * 100.0;
            assert!((record.change_percent - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        assert_eq!(rows(42, HOME_SYMBOLS), rows(42, HOME_SYMBOLS));
        assert_ne!(rows(42, HOME_SYMBOLS), rows(43, HOME_SYMBOLS));
    }

    #[test]
    fn test_tick_preserves_symbols_and_non_price_fields() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut records = generate_markets(&mut rng, MARKET_SYMBOLS);

        for _ in 0..200 {
            let before = records.clone();
            perturb_markets(&mut rng, &mut records);

            assert_eq!(records.len(), before.len());
            for (old, new) in before.iter().zip(records.iter()) {
                assert_eq!(old.symbol, new.symbol);
                assert_eq!(old.name, new.name);
                assert_eq!(old.volume, new.volume);

                assert!((new.change - (new.price - old.price)).abs() < 1e-9);
                let expected = (new.price - old.price) / old.price * 100.0;
                assert!((new.change_percent - expected).abs() < 1e-9);
                assert!(new.price >= PRICE_FLOOR);
                assert!((new.price - old.price).abs() <= MAX_TICK_DELTA);
            }
        }
    }

    #[test]
    fn test_price_floor() {
        let mut record = MarketRecord::new("BTC", "Bitcoin", 1_020.0, 0.0, 0.0, 1.0);
        apply_price_delta(&mut record, -45.0);
        assert_eq!(record.price, PRICE_FLOOR);
        assert!((record.change + 20.0).abs() < 1e-9);
        assert!((record.change_percent - (-20.0 / 1_020.0 * 100.0)).abs() < 1e-9);
    }

    #[test]
    fn test_mock_market_source() {
        let mut market = MockMarket::from_seed(3, HOME_SYMBOLS);
        let mut snapshot = market.snapshot();
        let symbols: Vec<_> = snapshot.iter().map(|r| r.symbol.clone()).collect();
        market.tick(&mut snapshot);
        let after: Vec<_> = snapshot.iter().map(|r| r.symbol.clone()).collect();
        assert_eq!(symbols, after);
        assert_eq!(market.catalog().len(), 8);
    }

    #[test]
    fn test_summary() {
        let records = vec![
            MarketRecord::new("A", "A", 10.0, 1.0, 2.5, 100.0),
            MarketRecord::new("B", "B", 20.0, -1.0, -1.0, 10.0),
            MarketRecord::new("C", "C", 30.0, 0.0, 0.0, 0.0),
        ];
        let summary = MarketSummary::from_records(&records);
        assert_eq!(summary.total_market_cap, 1_200.0);
        assert_eq!(summary.gainers, 1);
        assert_eq!(summary.losers, 1);
        assert_eq!(summary.top_gain_percent, Some(2.5));
        assert_eq!(MarketSummary::from_records(&[]).top_gain_percent, None);
    }
}
